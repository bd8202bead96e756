//! Badge components

use crate::props::{default_context, impl_props, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Element, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeOptions {
    pub context: String,
    pub pill: bool,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            context: default_context(),
            pill: false,
        }
    }
}

impl BadgeOptions {
    fn classes(&self) -> Vec<String> {
        let mut classes = vec!["badge".to_string()];
        if self.pill {
            classes.push("badge-pill".to_string());
        }
        classes.push(format!("badge-{}", self.context));
        classes
    }
}

/// `<span class="badge badge-{context}">`
#[derive(Debug, Clone, Default)]
pub struct Badge {
    options: BadgeOptions,
    props: Props,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounded badge, `badge badge-pill badge-{context}`
    pub fn pill() -> Self {
        Self::new().rounded(true)
    }

    pub fn with_options(options: BadgeOptions) -> Self {
        Self {
            options,
            props: Props::default(),
        }
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.options.context = context.into();
        self
    }

    pub fn rounded(mut self, pill: bool) -> Self {
        self.options.pill = pill;
        self
    }
}

impl Component for Badge {
    fn name(&self) -> &'static str {
        "Badge"
    }

    fn build(&self) -> Result<Node> {
        let element = html::span().default_attr("class", self.options.classes());
        Ok(self.props.apply(element).into())
    }
}

impl_props!(Badge);

/// Badge rendered as a link, `href="#"` unless overridden
#[derive(Debug, Clone, Default)]
pub struct LinkBadge {
    options: BadgeOptions,
    props: Props,
}

impl LinkBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.options.context = context.into();
        self
    }

    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href.into())
    }
}

impl Component for LinkBadge {
    fn name(&self) -> &'static str {
        "LinkBadge"
    }

    fn build(&self) -> Result<Node> {
        let element: Element = html::a().default_attr("class", self.options.classes());
        Ok(self.props.apply(element).into())
    }
}

impl_props!(LinkBadge);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_basic() {
        let html = Node::from(Badge::new().child("New")).render().unwrap();
        assert_eq!(html, r#"<span class="badge badge-primary">New</span>"#);
    }

    #[test]
    fn test_badge_pill() {
        let html = Node::from(Badge::pill().context("success").child("4"))
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<span class="badge badge-pill badge-success">4</span>"#
        );
    }

    #[test]
    fn test_link_badge() {
        let html = Node::from(LinkBadge::new().context("info").href("/inbox").child("Inbox"))
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<a href="/inbox" class="badge badge-info">Inbox</a>"#
        );
    }

    #[test]
    fn test_badge_text_is_verbatim() {
        let html = Node::from(Badge::new().child("<b>9</b>")).render().unwrap();
        assert!(html.contains("<b>9</b>"));

        let escaped = Node::from(Badge::new().child(Node::escaped("<b>9</b>")))
            .render()
            .unwrap();
        assert!(escaped.contains("&lt;b&gt;9&lt;/b&gt;"));
    }
}
