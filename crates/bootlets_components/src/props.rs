//! Builder state shared by every component

use bootlets_core::AttrMap;
use bootlets_html::{Element, Node};
use serde::{Deserialize, Serialize};

/// Children and caller attributes collected by a component's builder
#[derive(Debug, Clone, Default)]
pub struct Props {
    pub children: Vec<Node>,
    pub attrs: AttrMap,
}

impl Props {
    /// Layer the caller attributes over `element` and append the children
    pub fn apply(&self, element: Element) -> Element {
        element
            .attrs(&self.attrs)
            .children(self.children.iter().cloned())
    }
}

/// Bootstrap size scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// `{prefix}-sm` / `{prefix}-lg`; medium has no modifier
    pub fn modifier(self, prefix: &str) -> Option<String> {
        match self {
            Size::Sm => Some(format!("{prefix}-sm")),
            Size::Md => None,
            Size::Lg => Some(format!("{prefix}-lg")),
        }
    }
}

pub(crate) fn default_context() -> String {
    "primary".to_string()
}

/// Child builder methods plus the `Node` conversion
macro_rules! impl_children {
    ($ty:ident) => {
        impl $ty {
            pub fn child(mut self, child: impl Into<bootlets_html::Node>) -> Self {
                self.props.children.push(child.into());
                self
            }

            pub fn children<I, N>(mut self, children: I) -> Self
            where
                I: IntoIterator<Item = N>,
                N: Into<bootlets_html::Node>,
            {
                self.props
                    .children
                    .extend(children.into_iter().map(Into::into));
                self
            }
        }

        impl From<$ty> for bootlets_html::Node {
            fn from(component: $ty) -> Self {
                bootlets_html::Node::component(component)
            }
        }
    };
}

/// Child and attribute builder methods for `props`
macro_rules! impl_props {
    ($ty:ident) => {
        $crate::props::impl_children!($ty);

        impl $ty {
            pub fn attr(
                mut self,
                key: impl Into<String>,
                value: impl Into<bootlets_core::Value>,
            ) -> Self {
                bootlets_core::insert_attr(&mut self.props.attrs, key, value);
                self
            }

            pub fn class(mut self, value: impl Into<bootlets_core::Value>) -> Self {
                bootlets_core::insert_attr(&mut self.props.attrs, "class", value);
                self
            }
        }
    };
}

/// A component that is one tag with fixed classes and default attributes
macro_rules! simple_component {
    (
        $(#[$meta:meta])*
        $ty:ident => $tag:literal, class = $class:literal
        $(, $key:literal => $value:literal)* $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $ty {
            props: $crate::props::Props,
        }

        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl bootlets_html::Component for $ty {
            fn name(&self) -> &'static str {
                stringify!($ty)
            }

            fn build(&self) -> bootlets_core::Result<bootlets_html::Node> {
                let element = bootlets_html::Element::new($tag)
                    .default_attr("class", $class)
                    $(.default_attr($key, $value))*;
                Ok(self.props.apply(element).into())
            }
        }

        $crate::props::impl_props!($ty);
    };
}

pub(crate) use impl_children;
pub(crate) use impl_props;
pub(crate) use simple_component;
