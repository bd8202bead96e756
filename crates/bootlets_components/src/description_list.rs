//! Description list built from a mapping

use crate::props::{impl_props, Props};
use bootlets_core::{insert_attr, AttrMap, BootletsError, Result, Value};
use bootlets_html::{html, Component, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionListOptions {
    /// Grid columns for the title and description cells
    pub column_widths: (u8, u8),
}

impl Default for DescriptionListOptions {
    fn default() -> Self {
        Self {
            column_widths: (3, 9),
        }
    }
}

#[derive(Debug, Clone)]
enum Content {
    Value(Value),
    Pairs(Vec<(Node, Node)>),
}

/// `<dl class="row">` with a `dt`/`dd` pair per entry, in iteration order.
///
/// Content given as a [`Value`] must be a mapping or a list of
/// `[title, description]` pairs; anything else fails at render time.
#[derive(Debug, Clone)]
pub struct DescriptionList {
    content: Content,
    options: DescriptionListOptions,
    title_attrs: AttrMap,
    desc_attrs: AttrMap,
    props: Props,
}

impl DescriptionList {
    pub fn new(content: impl Into<Value>) -> Self {
        Self::with_content(Content::Value(content.into()))
    }

    /// Entries given directly as node pairs
    pub fn from_pairs<I, T, D>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<Node>,
        D: Into<Node>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(title, desc)| (title.into(), desc.into()))
            .collect();
        Self::with_content(Content::Pairs(pairs))
    }

    fn with_content(content: Content) -> Self {
        Self {
            content,
            options: DescriptionListOptions::default(),
            title_attrs: AttrMap::new(),
            desc_attrs: AttrMap::new(),
            props: Props::default(),
        }
    }

    pub fn column_widths(mut self, title: u8, desc: u8) -> Self {
        self.options.column_widths = (title, desc);
        self
    }

    pub fn with_options(mut self, options: DescriptionListOptions) -> Self {
        self.options = options;
        self
    }

    /// Extra attribute for every `dt`
    pub fn title_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.title_attrs, key, value);
        self
    }

    /// Extra attribute for every `dd`
    pub fn desc_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.desc_attrs, key, value);
        self
    }

    fn entries(&self) -> Result<Vec<(Node, Node)>> {
        match &self.content {
            Content::Pairs(pairs) => Ok(pairs.clone()),
            Content::Value(Value::Object(map)) => map
                .iter()
                .map(|(title, desc)| cell(desc).map(|desc| (Node::from(title), desc)))
                .collect(),
            Content::Value(Value::List(items)) => items.iter().map(pair_from_item).collect(),
            Content::Value(other) => Err(BootletsError::type_error(
                "DescriptionList",
                "a mapping or a list of [title, description] pairs",
                other.type_name(),
            )),
        }
    }
}

/// Text for a `dt`/`dd` cell; nested mappings have no markup form
fn cell(value: &Value) -> Result<Node> {
    match value {
        Value::Object(_) => Err(BootletsError::type_error(
            "DescriptionList",
            "a scalar or list entry",
            value.type_name(),
        )),
        other => Ok(Node::from(other)),
    }
}

fn pair_from_item(item: &Value) -> Result<(Node, Node)> {
    match item.as_list() {
        Some([title, desc]) => Ok((cell(title)?, cell(desc)?)),
        Some(list) => Err(BootletsError::type_error(
            "DescriptionList",
            "a [title, description] pair",
            format!("a list of {} items", list.len()),
        )),
        None => Err(BootletsError::type_error(
            "DescriptionList",
            "a [title, description] pair",
            item.type_name(),
        )),
    }
}

impl Component for DescriptionList {
    fn name(&self) -> &'static str {
        "DescriptionList"
    }

    fn build(&self) -> Result<Node> {
        let (title_width, desc_width) = self.options.column_widths;
        let mut list = html::dl().default_attr("class", "row");

        for (title, desc) in self.entries()? {
            list = list
                .child(
                    html::dt()
                        .default_attr("class", format!("col-sm-{title_width}"))
                        .attrs(&self.title_attrs)
                        .child(title),
                )
                .child(
                    html::dd()
                        .default_attr("class", format!("col-sm-{desc_width}"))
                        .attrs(&self.desc_attrs)
                        .child(desc),
                );
        }

        Ok(self.props.apply(list).into())
    }
}

impl_props!(DescriptionList);

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn person() -> Value {
        let mut map = IndexMap::new();
        map.insert("Name".to_string(), Value::from("Bob"));
        map.insert("Age".to_string(), Value::from("42"));
        Value::Object(map)
    }

    #[test]
    fn test_mapping_renders_pairs_in_order() {
        let html = Node::from(DescriptionList::new(person())).render().unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<dl class="row">"#,
                r#"<dt class="col-sm-3">Name</dt><dd class="col-sm-9">Bob</dd>"#,
                r#"<dt class="col-sm-3">Age</dt><dd class="col-sm-9">42</dd>"#,
                r#"</dl>"#
            )
        );
    }

    #[test]
    fn test_list_of_pairs() {
        let content = Value::from(vec![
            Value::from(vec!["CPU", "4 cores"]),
            Value::from(vec!["RAM", "8 GB"]),
        ]);
        let html = Node::from(DescriptionList::new(content).column_widths(4, 8))
            .render()
            .unwrap();
        assert!(html.contains(r#"<dt class="col-sm-4">CPU</dt><dd class="col-sm-8">4 cores</dd>"#));
        assert!(html.find("CPU").unwrap() < html.find("RAM").unwrap());
    }

    #[test]
    fn test_non_mapping_is_a_type_error() {
        let err = Node::from(DescriptionList::new("not a mapping"))
            .render()
            .unwrap_err();
        match err {
            BootletsError::Type { component, found, .. } => {
                assert_eq!(component, "DescriptionList");
                assert_eq!(found, "string");
            }
            other => panic!("expected a type error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_pair_is_a_type_error() {
        let content = Value::from(vec![Value::from(vec!["only-title"])]);
        let err = Node::from(DescriptionList::new(content)).render().unwrap_err();
        assert!(err.to_string().contains("a list of 1 items"));
    }

    #[test]
    fn test_nested_mapping_entry_is_a_type_error() {
        let mut meta = IndexMap::new();
        meta.insert("x".to_string(), Value::from(1));
        let mut content = IndexMap::new();
        content.insert("Meta".to_string(), Value::Object(meta.clone()));

        let err = Node::from(DescriptionList::new(content)).render().unwrap_err();
        match err {
            BootletsError::Type { component, found, .. } => {
                assert_eq!(component, "DescriptionList");
                assert_eq!(found, "mapping");
            }
            other => panic!("expected a type error, got {other:?}"),
        }

        let pairs = Value::from(vec![Value::List(vec![Value::from("Meta"), Value::Object(meta)])]);
        assert!(Node::from(DescriptionList::new(pairs)).render().is_err());
    }

    #[test]
    fn test_node_pairs_and_item_attrs() {
        let list = DescriptionList::from_pairs([(
            "Site",
            Node::from(html::a().attr("href", "https://example.com").child("example")),
        )])
        .title_attr("class", "text-truncate");
        let html = Node::from(list).render().unwrap();
        assert!(html.contains(r#"<dt class="col-sm-3 text-truncate">Site</dt>"#));
        assert!(html.contains(r#"<dd class="col-sm-9"><a href="https://example.com">example</a></dd>"#));
    }

    #[test]
    fn test_json_content() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"Name": "Bob", "Age": 42}"#).unwrap();
        let html = Node::from(DescriptionList::new(json)).render().unwrap();
        assert!(html.find("Name").unwrap() < html.find("Age").unwrap());
        assert!(html.contains(r#"<dd class="col-sm-9">42</dd>"#));
    }
}
