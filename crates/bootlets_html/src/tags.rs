//! Static tag registry
//!
//! Maps a literal tag name to its markup kind, built-in default attributes
//! and positional-argument contract. The lookup table is built once on
//! first use.

use crate::element::Markup;
use ahash::AHashMap;
use bootlets_core::{AttrMap, BootletsError, Result, Value};
use once_cell::sync::Lazy;

/// Compile-time default attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Flag(bool),
}

impl From<DefaultValue> for Value {
    fn from(v: DefaultValue) -> Self {
        match v {
            DefaultValue::Str(s) => Value::from(s),
            DefaultValue::Int(i) => Value::Integer(i),
            DefaultValue::Flag(b) => Value::Bool(b),
        }
    }
}

/// Declaration of a registered tag
#[derive(Debug)]
pub struct TagSpec {
    pub name: &'static str,
    pub markup: Markup,
    pub defaults: &'static [(&'static str, DefaultValue)],
    /// Names positional arguments bind to, in order
    pub arg_names: &'static [&'static str],
}

impl TagSpec {
    const fn paired(name: &'static str) -> Self {
        Self {
            name,
            markup: Markup::Paired,
            defaults: &[],
            arg_names: &[],
        }
    }

    const fn void(name: &'static str) -> Self {
        Self {
            name,
            markup: Markup::Void,
            defaults: &[],
            arg_names: &[],
        }
    }

    const fn with_defaults(mut self, defaults: &'static [(&'static str, DefaultValue)]) -> Self {
        self.defaults = defaults;
        self
    }

    const fn with_args(mut self, arg_names: &'static [&'static str]) -> Self {
        self.arg_names = arg_names;
        self
    }

    pub fn default_attrs(&self) -> AttrMap {
        self.defaults
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }
}

use DefaultValue::{Flag, Int, Str};

static TAGS: &[TagSpec] = &[
    // Special tags
    TagSpec {
        name: "comment",
        markup: Markup::Comment,
        defaults: &[],
        arg_names: &[],
    },
    TagSpec {
        name: "container",
        markup: Markup::Fragment { inline: false },
        defaults: &[],
        arg_names: &[],
    },
    // A
    TagSpec::paired("a").with_defaults(&[("href", Str("#"))]),
    TagSpec::paired("abbr").with_defaults(&[("title", Str("attribute"))]),
    TagSpec::paired("address"),
    TagSpec::void("area").with_defaults(&[
        ("shape", Str("rect")),
        ("coords", Str("0,0,0,0")),
        ("href", Str("#")),
        ("alt", Str("Area")),
    ]),
    TagSpec::paired("article"),
    TagSpec::paired("aside"),
    TagSpec::paired("audio"),
    // B
    TagSpec::paired("b"),
    TagSpec::paired("bdi"),
    TagSpec::paired("bdo").with_defaults(&[("dir", Str("rtl"))]),
    TagSpec::paired("blockquote"),
    TagSpec::paired("body"),
    TagSpec::void("br"),
    TagSpec::paired("button").with_defaults(&[("type", Str("button"))]),
    // C
    TagSpec::paired("canvas").with_defaults(&[("id", Str("myCanvas"))]),
    TagSpec::paired("caption"),
    TagSpec::paired("cite"),
    TagSpec::paired("code"),
    TagSpec::void("col"),
    TagSpec::paired("colgroup"),
    // D
    TagSpec::paired("data")
        .with_defaults(&[("value", Int(0))])
        .with_args(&["value"]),
    TagSpec::paired("datalist").with_defaults(&[("id", Str("MyDataList"))]),
    TagSpec::paired("dd"),
    TagSpec::paired("del"),
    TagSpec::paired("details"),
    TagSpec::paired("dfn"),
    TagSpec::paired("dialog").with_defaults(&[("open", Flag(true))]),
    TagSpec::paired("div"),
    TagSpec::paired("dl"),
    TagSpec::paired("dt"),
    // E
    TagSpec::paired("em"),
    // F
    TagSpec::paired("fieldset"),
    TagSpec::paired("footer"),
    TagSpec::paired("form"),
    // H
    TagSpec::paired("h1"),
    TagSpec::paired("h2"),
    TagSpec::paired("h3"),
    TagSpec::paired("h4"),
    TagSpec::paired("h5"),
    TagSpec::paired("h6"),
    TagSpec::paired("header"),
    TagSpec::void("hr"),
    // I
    TagSpec::paired("i"),
    TagSpec::void("img").with_args(&["src", "alt"]),
    TagSpec::void("input"),
    TagSpec::paired("ins"),
    // L
    TagSpec::paired("label"),
    TagSpec::paired("legend"),
    TagSpec::paired("li"),
    TagSpec::void("link"),
    // M
    TagSpec::paired("main"),
    TagSpec::void("meta"),
    // N
    TagSpec::paired("nav"),
    // O
    TagSpec::paired("ol"),
    TagSpec::paired("option"),
    // P
    TagSpec::paired("p"),
    // S
    TagSpec::paired("s"),
    TagSpec::paired("section"),
    TagSpec::paired("select"),
    TagSpec::paired("small"),
    TagSpec::void("source"),
    TagSpec::paired("span"),
    TagSpec::paired("strong"),
    // T
    TagSpec::paired("table"),
    TagSpec::paired("tbody"),
    TagSpec::paired("td"),
    TagSpec::paired("textarea"),
    TagSpec::paired("th"),
    TagSpec::paired("thead"),
    TagSpec::paired("tr"),
    // U
    TagSpec::paired("u"),
    TagSpec::paired("ul"),
    // W
    TagSpec::void("wbr"),
];

static REGISTRY: Lazy<AHashMap<&'static str, &'static TagSpec>> =
    Lazy::new(|| TAGS.iter().map(|spec| (spec.name, spec)).collect());

/// Registered tag entry for `name`, if any
pub fn get(name: &str) -> Option<&'static TagSpec> {
    REGISTRY.get(name).copied()
}

/// Registered tag entry for `name`, or a lookup error naming the tag
pub fn lookup(name: &str) -> Result<&'static TagSpec> {
    get(name).ok_or_else(|| BootletsError::lookup("tag", name))
}

pub fn is_registered(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// All registered tag names, in declaration order
pub fn names() -> impl Iterator<Item = &'static str> {
    TAGS.iter().map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in names() {
            assert!(seen.insert(name), "duplicate tag {name}");
        }
        assert_eq!(seen.len(), REGISTRY.len());
    }

    #[test]
    fn test_void_tags() {
        for name in ["br", "hr", "img", "input", "area", "col", "meta", "link", "wbr", "source"] {
            assert_eq!(lookup(name).unwrap().markup, Markup::Void, "{name}");
        }
    }

    #[test]
    fn test_lookup_missing() {
        let err = lookup("marquee").unwrap_err();
        assert_eq!(err.to_string(), "Unable to find tag 'marquee'");
        assert!(!is_registered("marquee"));
    }

    #[test]
    fn test_default_attrs_keep_declaration_order() {
        let attrs = lookup("area").unwrap().default_attrs();
        let keys: Vec<_> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["shape", "coords", "href", "alt"]);
    }
}
