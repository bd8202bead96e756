//! Modal dialog and its triggers
//!
//! A modal with id `x` renders as `#Modal_x`, titled by `#ModalLabel_x`;
//! triggers target it through `data-bs-target`.

use crate::props::{default_context, impl_props, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalOptions {
    pub id: String,
    pub title: String,
    pub tabindex: i64,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            id: "modal_id".to_string(),
            title: "Modal".to_string(),
            tabindex: -1,
        }
    }
}

fn modal_dom_id(id: &str) -> String {
    format!("Modal_{id}")
}

#[derive(Debug, Clone, Default)]
pub struct Modal {
    options: ModalOptions,
    footer: Option<Node>,
    props: Props,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ModalOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.options.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl Component for Modal {
    fn name(&self) -> &'static str {
        "Modal"
    }

    fn build(&self) -> Result<Node> {
        let id = &self.options.id;
        let label_id = format!("ModalLabel_{id}");

        let header = html::div()
            .class("modal-header")
            .child(
                html::h(5)?
                    .class("modal-title")
                    .attr("id", label_id.as_str())
                    .child(self.options.title.as_str()),
            )
            .child(
                html::button()
                    .class("close")
                    .attr("data-bs-dismiss", "modal")
                    .attr("aria-label", "Close")
                    .child(html::span().attr("aria-hidden", "true").child("&times;")),
            );

        let mut content = html::div()
            .class("modal-content")
            .child(header)
            .child(
                html::div()
                    .class("modal-body")
                    .children(self.props.children.iter().cloned()),
            );
        if let Some(footer) = &self.footer {
            content = content.child(html::div().class("modal-footer").child(footer.clone()));
        }

        let modal = html::div()
            .default_attr("class", "modal fade")
            .default_attr("id", modal_dom_id(id))
            .default_attr("tabindex", self.options.tabindex)
            .default_attr("role", "dialog")
            .default_attr("aria-labelledby", label_id.as_str())
            .default_attr("aria-hidden", "true")
            .attrs(&self.props.attrs)
            .child(
                html::div()
                    .class("modal-dialog modal-dialog-centered")
                    .attr("role", "document")
                    .child(content),
            );
        Ok(modal.into())
    }
}

impl_props!(Modal);

/// Button that opens the modal with the same id
#[derive(Debug, Clone)]
pub struct ModalButton {
    id: String,
    context: String,
    props: Props,
}

impl Default for ModalButton {
    fn default() -> Self {
        Self {
            id: ModalOptions::default().id,
            context: default_context(),
            props: Props::default(),
        }
    }
}

impl ModalButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

impl Component for ModalButton {
    fn name(&self) -> &'static str {
        "ModalButton"
    }

    fn build(&self) -> Result<Node> {
        let element = html::button()
            .default_attr("class", vec!["btn".to_string(), format!("btn-{}", self.context)])
            .default_attr("data-bs-toggle", "modal")
            .default_attr("data-bs-target", format!("#{}", modal_dom_id(&self.id)));
        let element = if self.props.children.is_empty() {
            element.attrs(&self.props.attrs).child("Submit")
        } else {
            self.props.apply(element)
        };
        Ok(element.into())
    }
}

impl_props!(ModalButton);

/// Link that opens the modal with the same id
#[derive(Debug, Clone)]
pub struct ModalLink {
    id: String,
    props: Props,
}

impl Default for ModalLink {
    fn default() -> Self {
        Self {
            id: ModalOptions::default().id,
            props: Props::default(),
        }
    }
}

impl ModalLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Component for ModalLink {
    fn name(&self) -> &'static str {
        "ModalLink"
    }

    fn build(&self) -> Result<Node> {
        let element = html::a()
            .default_attr("role", "button")
            .default_attr("data-bs-toggle", "modal")
            .default_attr("data-bs-target", format!("#{}", modal_dom_id(&self.id)));
        Ok(self.props.apply(element).into())
    }
}

impl_props!(ModalLink);
