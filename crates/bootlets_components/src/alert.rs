//! Alert components

use crate::props::{default_context, impl_props, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertOptions {
    pub context: String,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            context: default_context(),
        }
    }
}

/// `<div role="alert" class="alert alert-{context}">`
#[derive(Debug, Clone, Default)]
pub struct Alert {
    options: AlertOptions,
    props: Props,
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AlertOptions) -> Self {
        Self {
            options,
            props: Props::default(),
        }
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.options.context = context.into();
        self
    }
}

impl Component for Alert {
    fn name(&self) -> &'static str {
        "Alert"
    }

    fn build(&self) -> Result<Node> {
        let element = html::div().default_attr("role", "alert").default_attr(
            "class",
            vec!["alert".to_string(), format!("alert-{}", self.options.context)],
        );
        Ok(self.props.apply(element).into())
    }
}

impl_props!(Alert);

/// Heading inside an alert, `h4` unless resized
#[derive(Debug, Clone)]
pub struct AlertHeading {
    size: u8,
    props: Props,
}

impl Default for AlertHeading {
    fn default() -> Self {
        Self {
            size: 4,
            props: Props::default(),
        }
    }
}

impl AlertHeading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }
}

impl Component for AlertHeading {
    fn name(&self) -> &'static str {
        "AlertHeading"
    }

    fn build(&self) -> Result<Node> {
        let element = html::h(self.size)?.default_attr("class", "alert-heading");
        Ok(self.props.apply(element).into())
    }
}

impl_props!(AlertHeading);

/// Close button for dismissible alerts
#[derive(Debug, Clone, Default)]
pub struct AlertDismissButton {
    props: Props,
}

impl AlertDismissButton {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AlertDismissButton {
    fn name(&self) -> &'static str {
        "AlertDismissButton"
    }

    fn build(&self) -> Result<Node> {
        let element = html::button()
            .default_attr("class", "close")
            .default_attr("data-dismiss", "alert")
            .default_attr("aria-label", "Close")
            .child(html::span().attr("aria-hidden", "true").child("&times;"));
        Ok(self.props.apply(element).into())
    }
}

impl_props!(AlertDismissButton);
