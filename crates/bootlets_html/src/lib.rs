//! Composable HTML node tree and renderer
//!
//! This crate provides the node model (text, elements, components), the
//! static tag registry and the depth-first renderer that turns a node tree
//! into a markup string.

pub mod element;
pub mod html;
pub mod node;
pub mod renderer;
pub mod tags;

pub use bootlets_core::{AttrLayers, AttrMap, Attributes, BootletsError, Result, Value};
pub use element::{Element, Markup};
pub use node::{Component, Composite, Node};
pub use renderer::{escape_html, render};
pub use tags::TagSpec;
