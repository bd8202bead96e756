//! Layout wrappers

use crate::props::{impl_children, simple_component, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};

/// Renders its children with no wrapping tag, one per line (or separated
/// by single spaces when inline). Having no tag, it takes no attributes.
#[derive(Debug, Clone, Default)]
pub struct Container {
    inline: bool,
    props: Props,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }
}

impl Component for Container {
    fn name(&self) -> &'static str {
        "Container"
    }

    fn build(&self) -> Result<Node> {
        let fragment = if self.inline {
            html::inline_container()
        } else {
            html::container()
        };
        Ok(fragment.children(self.props.children.iter().cloned()).into())
    }
}

impl_children!(Container);

simple_component! {
    /// `<div class="accordion" id="myAccordion">`
    Accordion => "div", class = "accordion", "id" => "myAccordion"
}
