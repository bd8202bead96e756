//! Node variants and the component capability

use crate::element::Element;
use crate::renderer;
use bootlets_core::{Result, Value};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Trait for reusable UI components.
///
/// A component expands into another node through `build()`. Rendering a
/// component is rendering its expansion, so `build()` must be free of side
/// effects and return the same tree for the same instance.
///
/// This is also the extension point for foreign objects: anything that can
/// describe itself as a node tree implements `Component` and becomes a
/// child like any other.
///
/// # Example
///
/// ```
/// use bootlets_html::{html, Component, Node, Result};
///
/// #[derive(Debug)]
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn name(&self) -> &'static str {
///         "Greeting"
///     }
///
///     fn build(&self) -> Result<Node> {
///         Ok(html::p().child(format!("Hello, {}!", self.name)).into())
///     }
/// }
///
/// let node = Node::component(Greeting { name: "Ada".into() });
/// assert_eq!(node.render().unwrap(), "<p>Hello, Ada!</p>");
/// ```
pub trait Component: fmt::Debug + Send + Sync {
    /// Component name for diagnostics
    fn name(&self) -> &'static str;

    /// Expand this component into its node tree
    fn build(&self) -> Result<Node>;
}

/// A renderable unit: literal text, a concrete element, or a component
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Element),
    Component(Composite),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Text node with HTML special characters escaped
    pub fn escaped(content: &str) -> Self {
        Node::Text(renderer::escape_html(content))
    }

    pub fn component<C: Component + 'static>(component: C) -> Self {
        Node::Component(Composite::new(component))
    }

    /// Component whose expansion is built once and reused on every render
    pub fn memo<C: Component + 'static>(component: C) -> Self {
        Node::Component(Composite::memoized(component))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn render(&self) -> Result<String> {
        renderer::render(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Node::Component(composite)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&String> for Node {
    fn from(s: &String) -> Self {
        Node::Text(s.clone())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        Node::Text(value.to_string())
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Node::Text(v.to_string())
                }
            }
        )*
    };
}

impl_from_scalar!(i32, i64, u32, u64, usize, f64);

/// Shared handle to a component, optionally memoizing its expansion
#[derive(Clone)]
pub struct Composite {
    inner: Arc<dyn Component>,
    cache: Option<Arc<OnceCell<Node>>>,
}

impl Composite {
    pub fn new<C: Component + 'static>(component: C) -> Self {
        Self {
            inner: Arc::new(component),
            cache: None,
        }
    }

    pub fn memoized<C: Component + 'static>(component: C) -> Self {
        Self {
            inner: Arc::new(component),
            cache: Some(Arc::new(OnceCell::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub fn is_memoized(&self) -> bool {
        self.cache.is_some()
    }

    /// Build the expansion (or reuse the cached one) and hand it to `f`
    pub fn expand_with<R>(&self, f: impl FnOnce(&Node) -> Result<R>) -> Result<R> {
        match &self.cache {
            Some(cell) => {
                if cell.get().is_some() {
                    tracing::debug!(component = self.name(), "reusing memoized expansion");
                }
                let node = cell.get_or_try_init(|| self.inner.build())?;
                f(node)
            }
            None => {
                let node = self.inner.build()?;
                f(&node)
            }
        }
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("name", &self.name())
            .field("memoized", &self.is_memoized())
            .finish()
    }
}
