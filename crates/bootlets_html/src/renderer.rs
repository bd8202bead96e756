//! Renderer that turns a node tree into a markup string
//!
//! The walk is depth-first: text is copied verbatim, elements resolve their
//! attribute layers and wrap their children, components are rendered
//! through their `build()` expansion.

use crate::element::{Element, Markup};
use crate::node::Node;
use bootlets_core::{BootletsError, Result};

/// Render a node tree to a markup string
pub fn render(node: &Node) -> Result<String> {
    let mut output = String::new();
    write_node(node, &mut output)?;
    Ok(output)
}

pub fn write_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Text(text) => {
            out.push_str(text);
            Ok(())
        }
        Node::Element(element) => write_element(element, out),
        Node::Component(composite) => {
            tracing::trace!(component = composite.name(), "expanding component");
            composite.expand_with(|expansion| write_node(expansion, out))
        }
    }
}

pub fn write_element(element: &Element, out: &mut String) -> Result<()> {
    match element.markup() {
        Markup::Paired => {
            out.push('<');
            out.push_str(element.tag());
            out.push_str(&element.attributes()?.to_string());
            out.push('>');
            write_children(element.child_nodes(), "", out)?;
            out.push_str("</");
            out.push_str(element.tag());
            out.push('>');
        }
        Markup::Void => {
            if !element.child_nodes().is_empty() {
                return Err(BootletsError::RenderError(format!(
                    "<{}> is a void element and cannot have children",
                    element.tag()
                )));
            }
            out.push('<');
            out.push_str(element.tag());
            out.push_str(&element.attributes()?.to_string());
            out.push_str(" />");
        }
        Markup::Comment | Markup::Fragment { .. } if !element.attributes()?.is_empty() => {
            let kind = match element.markup() {
                Markup::Comment => "a comment",
                _ => "a container",
            };
            return Err(BootletsError::RenderError(format!(
                "{kind} has no tag to carry attributes"
            )));
        }
        Markup::Comment => {
            out.push_str("<!-- ");
            write_children(element.child_nodes(), "", out)?;
            out.push_str(" -->");
        }
        Markup::Fragment { inline } => {
            let separator = if inline { " " } else { "\n" };
            write_children(element.child_nodes(), separator, out)?;
        }
    }
    Ok(())
}

fn write_children(children: &[Node], separator: &str, out: &mut String) -> Result<()> {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_node(child, out)?;
    }
    Ok(())
}

/// HTML escape function for callers that opt into escaping
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html;

    #[test]
    fn test_nested_render() {
        let tree: Node = html::div()
            .class("card")
            .child(html::h(5).unwrap().child("Title"))
            .child(html::p().child("Body"))
            .into();

        assert_eq!(
            render(&tree).unwrap(),
            r#"<div class="card"><h5>Title</h5><p>Body</p></div>"#
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        let tree: Node = html::span().child("<b>bold</b> &times;").into();
        assert_eq!(render(&tree).unwrap(), "<span><b>bold</b> &times;</span>");
    }

    #[test]
    fn test_fragment_joins_with_newline() {
        let tree: Node = html::container().child("a").child("b").into();
        assert_eq!(render(&tree).unwrap(), "a\nb");
    }

    #[test]
    fn test_inline_fragment_joins_with_space() {
        let tree: Node = html::inline_container().child("a").child("b").into();
        assert_eq!(render(&tree).unwrap(), "a b");
    }

    #[test]
    fn test_empty_container() {
        let tree: Node = html::container().into();
        assert_eq!(render(&tree).unwrap(), "");
    }

    #[test]
    fn test_tagless_element_with_attributes_fails() {
        let tree: Node = html::container().class("row").child("a").into();
        let err = render(&tree).unwrap_err();
        assert!(matches!(err, BootletsError::RenderError(_)));
        assert!(err.to_string().contains("a container has no tag to carry attributes"));
    }

    #[test]
    fn test_comment() {
        let tree: Node = html::comment("note").into();
        assert_eq!(render(&tree).unwrap(), "<!-- note -->");
    }

    #[test]
    fn test_void_with_children_fails() {
        let tree: Node = html::br().child("x").into();
        assert!(matches!(
            render(&tree).unwrap_err(),
            BootletsError::RenderError(_)
        ));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
    }
}
