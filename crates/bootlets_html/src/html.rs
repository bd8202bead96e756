//! Tag constructors
//!
//! One function per registered tag, so trees read as nested calls:
//! `div().class("row").child(p().child("text"))`.

use crate::element::Element;
use bootlets_core::{BootletsError, Result, Value};

macro_rules! tag_fns {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` element")]
            pub fn $name() -> Element {
                Element::new($tag)
            }
        )*
    };
}

tag_fns! {
    a => "a",
    abbr => "abbr",
    address => "address",
    area => "area",
    article => "article",
    aside => "aside",
    audio => "audio",
    b => "b",
    bdi => "bdi",
    bdo => "bdo",
    blockquote => "blockquote",
    body => "body",
    br => "br",
    button => "button",
    canvas => "canvas",
    caption => "caption",
    cite => "cite",
    code => "code",
    col => "col",
    colgroup => "colgroup",
    data => "data",
    datalist => "datalist",
    dd => "dd",
    del => "del",
    details => "details",
    dfn => "dfn",
    dialog => "dialog",
    div => "div",
    dl => "dl",
    dt => "dt",
    em => "em",
    fieldset => "fieldset",
    footer => "footer",
    form => "form",
    header => "header",
    hr => "hr",
    i => "i",
    img => "img",
    input => "input",
    ins => "ins",
    label => "label",
    legend => "legend",
    li => "li",
    nav => "nav",
    ol => "ol",
    option => "option",
    p => "p",
    s => "s",
    section => "section",
    select => "select",
    small => "small",
    span => "span",
    strong => "strong",
    table => "table",
    tbody => "tbody",
    td => "td",
    textarea => "textarea",
    th => "th",
    thead => "thead",
    tr => "tr",
    u => "u",
    ul => "ul",
}

/// Heading `<h{size}>`; size must be in `1..=6`
pub fn h(size: u8) -> Result<Element> {
    if !(1..=6).contains(&size) {
        return Err(BootletsError::type_error(
            "h",
            "heading size between 1 and 6",
            size.to_string(),
        ));
    }
    Ok(Element::new(format!("h{size}")))
}

/// `<img>` with its positional `src` and `alt` bound
pub fn image(src: impl Into<Value>, alt: impl Into<Value>) -> Result<Element> {
    Element::with_args("img", vec![src.into(), alt.into()])
}

/// `<!-- content -->`
pub fn comment(content: impl Into<String>) -> Element {
    Element::new("comment").child(content.into())
}

/// Children joined by newlines, without a wrapping tag
pub fn container() -> Element {
    Element::fragment(false)
}

/// Children joined by single spaces, without a wrapping tag
pub fn inline_container() -> Element {
    Element::fragment(true)
}
