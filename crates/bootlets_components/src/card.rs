//! Card components

use crate::props::{impl_props, simple_component, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};
use serde::{Deserialize, Serialize};

simple_component! {
    /// `<div class="card mb-3">`
    Card => "div", class = "card mb-3"
}

simple_component! {
    CardBody => "div", class = "card-body"
}

simple_component! {
    CardFooter => "div", class = "card-footer"
}

simple_component! {
    /// Paragraph of card copy
    CardText => "p", class = "card-text"
}

/// A heading with a fixed class; headers default to `h4`, titles to `h5`
#[derive(Debug, Clone)]
pub struct CardHeading {
    name: &'static str,
    class: &'static str,
    size: u8,
    props: Props,
}

impl CardHeading {
    pub fn header() -> Self {
        Self {
            name: "CardHeader",
            class: "card-header",
            size: 4,
            props: Props::default(),
        }
    }

    pub fn title() -> Self {
        Self {
            name: "CardTitle",
            class: "card-title",
            size: 5,
            props: Props::default(),
        }
    }

    pub fn size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }
}

impl Component for CardHeading {
    fn name(&self) -> &'static str {
        self.name
    }

    fn build(&self) -> Result<Node> {
        let element = html::h(self.size)?.default_attr("class", self.class);
        Ok(self.props.apply(element).into())
    }
}

impl_props!(CardHeading);

/// Where a card image sits relative to the body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLocation {
    #[default]
    Top,
    Bottom,
}

impl ImageLocation {
    fn as_str(self) -> &'static str {
        match self {
            ImageLocation::Top => "top",
            ImageLocation::Bottom => "bottom",
        }
    }
}

/// `<img class="card-img-{location}">`
#[derive(Debug, Clone, Default)]
pub struct CardImage {
    location: ImageLocation,
    props: Props,
}

impl CardImage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: ImageLocation) -> Self {
        self.location = location;
        self
    }

    pub fn src(self, src: impl Into<String>) -> Self {
        self.attr("src", src.into())
    }

    pub fn alt(self, alt: impl Into<String>) -> Self {
        self.attr("alt", alt.into())
    }
}

impl Component for CardImage {
    fn name(&self) -> &'static str {
        "CardImage"
    }

    fn build(&self) -> Result<Node> {
        let element = html::img()
            .default_attr("src", "#")
            .default_attr("alt", "myCardImage")
            .default_attr("class", format!("card-img-{}", self.location.as_str()));
        Ok(self.props.apply(element).into())
    }
}

impl_props!(CardImage);
