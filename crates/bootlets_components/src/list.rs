//! List composites: each child is wrapped in a per-item element

use crate::props::{impl_props, Props};
use bootlets_core::{insert_attr, AttrMap, Result, Value};
use bootlets_html::{html, Component, Element, Node};

/// `<ul>` wrapping every child in an item element (`<li>` by default)
#[derive(Debug, Clone)]
pub struct UnorderedList {
    item_tag: String,
    item_attrs: AttrMap,
    props: Props,
}

impl Default for UnorderedList {
    fn default() -> Self {
        Self {
            item_tag: "li".to_string(),
            item_attrs: AttrMap::new(),
            props: Props::default(),
        }
    }
}

impl UnorderedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag used for each item
    pub fn item_tag(mut self, tag: impl Into<String>) -> Self {
        self.item_tag = tag.into();
        self
    }

    /// Attribute set on every item
    pub fn item_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.item_attrs, key, value);
        self
    }
}

impl Component for UnorderedList {
    fn name(&self) -> &'static str {
        "UnorderedList"
    }

    fn build(&self) -> Result<Node> {
        let items = self.props.children.iter().map(|child| {
            Element::new(self.item_tag.as_str())
                .attrs(&self.item_attrs)
                .child(child.clone())
        });
        Ok(html::ul()
            .attrs(&self.props.attrs)
            .children(items)
            .into())
    }
}

impl_props!(UnorderedList);

/// `<ul class="list-group">` with `list-group-item` entries
#[derive(Debug, Clone)]
pub struct ListGroup {
    flush: bool,
    item_class: String,
    props: Props,
}

impl Default for ListGroup {
    fn default() -> Self {
        Self {
            flush: false,
            item_class: "list-group-item".to_string(),
            props: Props::default(),
        }
    }
}

impl ListGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop outer borders and rounded corners
    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }
}

impl Component for ListGroup {
    fn name(&self) -> &'static str {
        "ListGroup"
    }

    fn build(&self) -> Result<Node> {
        let mut classes = vec!["list-group"];
        if self.flush {
            classes.push("list-group-flush");
        }

        let items = self
            .props
            .children
            .iter()
            .map(|child| html::li().class(self.item_class.as_str()).child(child.clone()));

        Ok(html::ul()
            .default_attr("class", classes)
            .attrs(&self.props.attrs)
            .children(items)
            .into())
    }
}

impl_props!(ListGroup);
