//! Button components
//!
//! Class order is fixed: `btn`, size modifier, `btn-[outline-]{context}`,
//! then `btn-block` and `disabled` when set.

use crate::props::{default_context, impl_props, Props, Size};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub context: String,
    pub size: Size,
    pub outline: bool,
    pub block: bool,
    pub disabled: bool,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            context: default_context(),
            size: Size::Md,
            outline: false,
            block: false,
            disabled: false,
        }
    }
}

impl ButtonOptions {
    /// The computed class string
    pub fn class_string(&self) -> String {
        let mut classes = String::from("btn");

        if let Some(size) = self.size.modifier("btn") {
            classes.push(' ');
            classes.push_str(&size);
        }

        classes.push_str(" btn-");
        if self.outline {
            classes.push_str("outline-");
        }
        classes.push_str(&self.context);

        if self.block {
            classes.push_str(" btn-block");
        }
        if self.disabled {
            classes.push_str(" disabled");
        }
        classes
    }
}

macro_rules! button_option_setters {
    ($ty:ident) => {
        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_options(options: ButtonOptions) -> Self {
                Self {
                    options,
                    props: Props::default(),
                }
            }

            pub fn context(mut self, context: impl Into<String>) -> Self {
                self.options.context = context.into();
                self
            }

            pub fn size(mut self, size: Size) -> Self {
                self.options.size = size;
                self
            }

            pub fn outline(mut self, outline: bool) -> Self {
                self.options.outline = outline;
                self
            }

            pub fn block(mut self, block: bool) -> Self {
                self.options.block = block;
                self
            }

            pub fn disabled(mut self, disabled: bool) -> Self {
                self.options.disabled = disabled;
                self
            }

            pub fn options(&self) -> &ButtonOptions {
                &self.options
            }
        }
    };
}

/// `<button type="button" class="btn ...">`
#[derive(Debug, Clone, Default)]
pub struct Button {
    options: ButtonOptions,
    props: Props,
}

button_option_setters!(Button);

impl Component for Button {
    fn name(&self) -> &'static str {
        "Button"
    }

    fn build(&self) -> Result<Node> {
        let element = html::button().default_attr("class", self.options.class_string());
        Ok(self.props.apply(element).into())
    }
}

impl_props!(Button);

/// An `<a>` styled as a button
#[derive(Debug, Clone, Default)]
pub struct ButtonLink {
    options: ButtonOptions,
    props: Props,
}

button_option_setters!(ButtonLink);

impl Component for ButtonLink {
    fn name(&self) -> &'static str {
        "ButtonLink"
    }

    fn build(&self) -> Result<Node> {
        let mut element = html::a()
            .default_attr("role", "button")
            .default_attr("class", self.options.class_string());
        if self.options.disabled {
            element = element.default_attr("aria-disabled", "true");
        }
        Ok(self.props.apply(element).into())
    }
}

impl_props!(ButtonLink);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonGroupOptions {
    pub vertical: bool,
    pub size: Size,
}

/// `<div role="group" class="btn-group">` around a set of buttons
#[derive(Debug, Clone, Default)]
pub struct ButtonGroup {
    options: ButtonGroupOptions,
    props: Props,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.options.vertical = vertical;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.options.size = size;
        self
    }
}

impl Component for ButtonGroup {
    fn name(&self) -> &'static str {
        "ButtonGroup"
    }

    fn build(&self) -> Result<Node> {
        let base = if self.options.vertical {
            "btn-group-vertical"
        } else {
            "btn-group"
        };
        let mut classes = vec![base.to_string()];
        classes.extend(self.options.size.modifier("btn-group"));

        let element = html::div()
            .default_attr("role", "group")
            .default_attr("aria-label", "myButtonGroup")
            .default_attr("class", classes);
        Ok(self.props.apply(element).into())
    }
}

impl_props!(ButtonGroup);
