//! Dropdown components

use crate::props::{default_context, impl_props, simple_component, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};

simple_component! {
    Dropdown => "div", class = "dropdown"
}

simple_component! {
    DropdownMenu => "div", class = "dropdown-menu", "aria-labelledby" => "myDropdownMenu"
}

simple_component! {
    DropdownItem => "a", class = "dropdown-item"
}

simple_component! {
    DropdownDivider => "div", class = "dropdown-divider"
}

/// Toggle button, `btn btn-{context} dropdown-toggle`
#[derive(Debug, Clone)]
pub struct DropdownButton {
    context: String,
    props: Props,
}

impl Default for DropdownButton {
    fn default() -> Self {
        Self {
            context: default_context(),
            props: Props::default(),
        }
    }
}

impl DropdownButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

impl Component for DropdownButton {
    fn name(&self) -> &'static str {
        "DropdownButton"
    }

    fn build(&self) -> Result<Node> {
        let element = html::button()
            .default_attr(
                "class",
                vec![
                    "btn".to_string(),
                    format!("btn-{}", self.context),
                    "dropdown-toggle".to_string(),
                ],
            )
            .default_attr("data-toggle", "dropdown")
            .default_attr("aria-haspopup", "true")
            .default_attr("aria-expanded", "false");
        Ok(self.props.apply(element).into())
    }
}

impl_props!(DropdownButton);
