//! Concrete tag elements

use crate::node::Node;
use crate::renderer;
use crate::tags::{self, TagSpec};
use bootlets_core::attrs::bind_positional;
use bootlets_core::{insert_attr, resolve, AttrLayers, AttrMap, Attributes, Result, Value};
use serde::{Deserialize, Serialize};

/// How an element wraps its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Markup {
    /// `<tag attrs>children</tag>`
    Paired,
    /// `<tag attrs />`, no children
    Void,
    /// `<!-- children -->`
    Comment,
    /// Children only, joined by a newline or, when inline, a space
    Fragment { inline: bool },
}

/// A tag with layered attributes and ordered children
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    markup: Markup,
    layers: AttrLayers,
    children: Vec<Node>,
}

impl Element {
    /// Create an element, seeding defaults from the tag registry when the
    /// tag is known. Unknown tags become plain paired elements.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        match tags::get(&tag) {
            Some(spec) => Self::from_spec(spec),
            None => Self {
                tag,
                markup: Markup::Paired,
                layers: AttrLayers::new(),
                children: Vec::new(),
            },
        }
    }

    /// Create an element for a registered tag, failing on unknown names
    pub fn lookup(tag: &str) -> Result<Self> {
        tags::lookup(tag).map(Self::from_spec)
    }

    /// Create a registered element and bind positional arguments against
    /// the tag's declared argument names.
    pub fn with_args(tag: &str, args: Vec<Value>) -> Result<Self> {
        let spec = tags::lookup(tag)?;
        let mut element = Self::from_spec(spec);
        element.layers.positional = bind_positional(spec.name, spec.arg_names, args)?;
        Ok(element)
    }

    pub fn from_spec(spec: &TagSpec) -> Self {
        Self {
            tag: spec.name.to_string(),
            markup: spec.markup,
            layers: AttrLayers {
                defaults: spec.default_attrs(),
                ..AttrLayers::new()
            },
            children: Vec::new(),
        }
    }

    /// A fragment that renders only its children
    pub fn fragment(inline: bool) -> Self {
        Self {
            tag: String::new(),
            markup: Markup::Fragment { inline },
            layers: AttrLayers::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    pub fn layers(&self) -> &AttrLayers {
        &self.layers
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Resolve the attribute layers into output order
    pub fn attributes(&self) -> Result<Attributes> {
        resolve(&self.tag, &self.layers)
    }

    /// Set a keyword attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.layers.keywords, key, value);
        self
    }

    /// Merge a mapping of keyword attributes
    pub fn attrs(mut self, attrs: &AttrMap) -> Self {
        for (key, value) in attrs {
            self = self.attr(key.clone(), value.clone());
        }
        self
    }

    /// Add keyword class tokens
    pub fn class(mut self, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.layers.keywords, "class", value);
        self
    }

    /// Set a default attribute, lowest precedence
    pub fn default_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.layers.defaults, key, value);
        self
    }

    /// Merge a mapping of default attributes
    pub fn default_attrs(mut self, attrs: &AttrMap) -> Self {
        for (key, value) in attrs {
            self = self.default_attr(key.clone(), value.clone());
        }
        self
    }

    /// Set a derived attribute, highest precedence
    pub fn derived_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.layers.derived, key, value);
        self
    }

    /// Add derived class tokens computed by a component
    pub fn derived_class(mut self, value: impl Into<Value>) -> Self {
        insert_attr(&mut self.layers.derived, "class", value);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        renderer::write_element(self, &mut out)?;
        Ok(out)
    }
}
