//! Data table

use crate::props::{impl_props, Props};
use bootlets_core::Result;
use bootlets_html::{html, Component, Node};

/// `<table class="table table-hover">` with a header row and body rows
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<Node>,
    rows: Vec<Vec<Node>>,
    hover: bool,
    props: Props,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            hover: true,
            props: Props::default(),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers<I, N>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn row<I, N>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }
}

impl Component for Table {
    fn name(&self) -> &'static str {
        "Table"
    }

    fn build(&self) -> Result<Node> {
        let mut classes = vec!["table"];
        if self.hover {
            classes.push("table-hover");
        }

        let head = html::thead().child(
            html::tr().children(
                self.headers
                    .iter()
                    .map(|header| html::th().attr("scope", "col").child(header.clone())),
            ),
        );
        let body = html::tbody().children(self.rows.iter().map(|row| {
            html::tr().children(row.iter().map(|cell| html::td().child(cell.clone())))
        }));

        let table = html::table()
            .default_attr("class", classes)
            .child(head)
            .child(body);
        Ok(self.props.apply(table).into())
    }
}

impl_props!(Table);
