//! Attribute resolution across precedence layers
//!
//! Every element carries four attribute layers, merged low to high:
//!
//! 1. built-in defaults (tag registry, component defaults)
//! 2. positional-argument bindings
//! 3. explicit keyword attributes
//! 4. derived values computed by a component
//!
//! A later layer overrides an earlier one key by key. `class` is the single
//! accumulative attribute: its tokens are collected from every layer in
//! order and de-duplicated, so `btn` from defaults and `extra` from keywords
//! resolve to `class="btn extra"`.

use crate::errors::{BootletsError, Result};
use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Unresolved attribute mapping, keyed by the caller's spelling
pub type AttrMap = IndexMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Layer {
    Default,
    Positional,
    Keyword,
    Derived,
}

impl Layer {
    fn label(self) -> &'static str {
        match self {
            Layer::Default => "default",
            Layer::Positional => "positional argument",
            Layer::Keyword => "keyword argument",
            Layer::Derived => "derived value",
        }
    }
}

/// The four attribute sources of an element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrLayers {
    pub defaults: AttrMap,
    pub positional: AttrMap,
    pub keywords: AttrMap,
    pub derived: AttrMap,
}

impl AttrLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
            && self.positional.is_empty()
            && self.keywords.is_empty()
            && self.derived.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (Layer, &AttrMap)> {
        [
            (Layer::Default, &self.defaults),
            (Layer::Positional, &self.positional),
            (Layer::Keyword, &self.keywords),
            (Layer::Derived, &self.derived),
        ]
        .into_iter()
    }
}

/// Normalize a caller-side attribute key to its wire name.
///
/// Keys starting with `_` are private options and yield `None`. One trailing
/// `_` is stripped (`class_`, `for_`), then `_` becomes `-`
/// (`aria_label` -> `aria-label`).
pub fn normalize_key(key: &str) -> Option<String> {
    if key.is_empty() || key.starts_with('_') {
        return None;
    }
    let key = key.strip_suffix('_').unwrap_or(key);
    Some(key.replace('_', "-"))
}

fn push_class_tokens(value: &Value, tokens: &mut SmallVec<[String; 8]>) {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::List(items) => {
            for item in items {
                push_class_tokens(item, tokens);
            }
        }
        other => {
            for token in other.to_string().split_whitespace() {
                if !tokens.iter().any(|t| t == token) {
                    tokens.push(token.to_string());
                }
            }
        }
    }
}

fn is_class_key(key: &str) -> bool {
    key == "class" || key == "class_"
}

/// Insert a caller attribute into one layer.
///
/// Class values accumulate into a list instead of replacing each other, so
/// repeated class insertions add tokens.
pub fn insert_attr(layer: &mut AttrMap, key: impl Into<String>, value: impl Into<Value>) {
    let key = key.into();
    let value = value.into();
    if !is_class_key(&key) {
        layer.insert(key, value);
        return;
    }
    let slot = layer
        .shift_remove("class_")
        .or_else(|| layer.shift_remove("class"));
    let merged = match slot {
        None => value,
        Some(Value::List(mut items)) => {
            items.push(value);
            Value::List(items)
        }
        Some(existing) => Value::List(vec![existing, value]),
    };
    layer.insert("class".to_string(), merged);
}

/// Bind positional arguments to their declared names.
///
/// The argument count must match the contract exactly.
pub fn bind_positional(component: &str, names: &[&str], args: Vec<Value>) -> Result<AttrMap> {
    if args.len() != names.len() {
        return Err(BootletsError::Arity {
            component: component.to_string(),
            expected: names.len(),
            given: args.len(),
        });
    }
    Ok(names
        .iter()
        .map(|name| name.to_string())
        .zip(args)
        .collect())
}

/// Merge attribute layers into the final ordered attribute list.
///
/// `component` labels the diagnostics emitted when a keyword or derived
/// value replaces a positional binding of the same name, and the type error
/// returned when a mapping reaches an attribute value.
pub fn resolve(component: &str, layers: &AttrLayers) -> Result<Attributes> {
    let mut merged: IndexMap<String, (Layer, &Value)> = IndexMap::new();
    let mut classes: SmallVec<[String; 8]> = SmallVec::new();
    let mut has_class_slot = false;

    for (layer, map) in layers.iter() {
        for (key, value) in map {
            let Some(name) = normalize_key(key) else {
                continue;
            };
            if contains_mapping(value) {
                return Err(BootletsError::type_error(
                    component,
                    format!("a scalar or list value for attribute '{name}'"),
                    "mapping",
                ));
            }

            if name == "class" {
                push_class_tokens(value, &mut classes);
                if !has_class_slot {
                    // Reserve the position of the first class occurrence
                    merged.insert(name, (layer, value));
                    has_class_slot = true;
                }
                continue;
            }

            if let Some((previous, _)) = merged.get(&name) {
                if *previous == Layer::Positional && layer > Layer::Positional {
                    tracing::warn!(
                        component,
                        attribute = %name,
                        "{}() {} '{}' overwriting positional argument with same name",
                        component,
                        layer.label(),
                        name
                    );
                }
            }
            merged.insert(name, (layer, value));
        }
    }

    let mut entries = IndexMap::with_capacity(merged.len());
    for (name, (_, value)) in merged {
        if name == "class" {
            if !classes.is_empty() {
                entries.insert(name, Some(classes.join(" ")));
            }
            continue;
        }
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => {
                entries.insert(name, None);
            }
            other => {
                entries.insert(name, Some(other.to_string()));
            }
        }
    }

    Ok(Attributes { entries })
}

fn contains_mapping(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::List(items) => items.iter().any(contains_mapping),
        _ => false,
    }
}

/// Resolved attributes in output order.
///
/// A `None` value is a bare boolean attribute such as `disabled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    entries: IndexMap<String, Option<String>>,
}

impl Attributes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_deref().unwrap_or(""))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn class(&self) -> Option<&str> {
        self.get("class")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Serializes as ` key="value"` pairs, each with a leading space.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            match value {
                Some(value) => write!(f, " {key}=\"{value}\"")?,
                None => write!(f, " {key}")?,
            }
        }
        Ok(())
    }
}
