//! Breadcrumb navigation

use crate::props::{impl_props, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};

/// One `<li class="breadcrumb-item">`, with `active` when current
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbItem {
    active: bool,
    props: Props,
}

impl BreadcrumbItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Component for BreadcrumbItem {
    fn name(&self) -> &'static str {
        "BreadcrumbItem"
    }

    fn build(&self) -> Result<Node> {
        let mut classes = vec!["breadcrumb-item"];
        if self.active {
            classes.push("active");
        }
        let element = html::li().default_attr("class", classes);
        Ok(self.props.apply(element).into())
    }
}

impl_props!(BreadcrumbItem);

/// `<nav aria-label="breadcrumb"><ol class="breadcrumb">` with one item per
/// child; only the last item is active and carries `aria-current="page"`.
#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
    props: Props,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Breadcrumb {
    fn name(&self) -> &'static str {
        "Breadcrumb"
    }

    fn build(&self) -> Result<Node> {
        let last = self.props.children.len().saturating_sub(1);
        let items = self.props.children.iter().enumerate().map(|(i, child)| {
            let item = BreadcrumbItem::new().child(child.clone());
            if i == last {
                item.active(true).attr("aria-current", "page")
            } else {
                item
            }
        });

        let list = html::ol()
            .default_attr("class", "breadcrumb")
            .attrs(&self.props.attrs)
            .children(items);

        Ok(html::nav().attr("aria-label", "breadcrumb").child(list).into())
    }
}

impl_props!(Breadcrumb);
