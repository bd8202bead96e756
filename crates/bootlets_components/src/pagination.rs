//! Page navigation
//!
//! [`Pagination`] does not know how pages are counted or how URLs are built.
//! Both come from collaborators: a [`PageCursor`] describing the current
//! position and an [`EndpointResolver`] turning an endpoint name plus query
//! parameters into a URL.

use crate::props::{impl_props, Props};
use bootlets_core::{AttrMap, Result, Value};
use bootlets_html::{html, Component, Element, Node};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Query arguments of the request being served
pub type RequestArgs = AttrMap;

/// Position within a paginated collection
pub trait PageCursor: fmt::Debug + Send + Sync {
    /// Current page, 1-based
    fn page(&self) -> u32;
    fn has_prev(&self) -> bool;
    fn has_next(&self) -> bool;
    fn prev_num(&self) -> Option<u32>;
    fn next_num(&self) -> Option<u32>;
    /// Page numbers to show, with `None` marking a gap
    fn iter_pages(&self) -> Vec<Option<u32>>;
}

/// Builds URLs for named endpoints
pub trait EndpointResolver: fmt::Debug + Send + Sync {
    /// Failures should be reported as [`BootletsError::Endpoint`](bootlets_core::BootletsError::Endpoint).
    fn url_for(&self, endpoint: &str, params: &AttrMap) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    /// `aria-label` of the surrounding `nav`
    pub label: String,
    /// Query parameter carrying the page number
    pub request_param: String,
    /// Extra parameters passed to every URL, overriding request args
    pub url_kwargs: AttrMap,
    /// Appended verbatim to every generated URL
    pub fragment: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            label: "Pagination".to_string(),
            request_param: "page".to_string(),
            url_kwargs: AttrMap::new(),
            fragment: String::new(),
        }
    }
}

/// `<nav><ul class="pagination">` with prev, page and next items
#[derive(Debug, Clone)]
pub struct Pagination {
    cursor: Arc<dyn PageCursor>,
    resolver: Arc<dyn EndpointResolver>,
    endpoint: String,
    request_args: RequestArgs,
    options: PaginationOptions,
    props: Props,
}

impl Pagination {
    pub fn new(
        cursor: Arc<dyn PageCursor>,
        resolver: Arc<dyn EndpointResolver>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            cursor,
            resolver,
            endpoint: endpoint.into(),
            request_args: RequestArgs::new(),
            options: PaginationOptions::default(),
            props: Props::default(),
        }
    }

    pub fn with_options(mut self, options: PaginationOptions) -> Self {
        self.options = options;
        self
    }

    /// Query arguments carried over into every page URL
    pub fn request_args(mut self, args: RequestArgs) -> Self {
        self.request_args = args;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = label.into();
        self
    }

    pub fn request_param(mut self, param: impl Into<String>) -> Self {
        self.options.request_param = param.into();
        self
    }

    pub fn url_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.url_kwargs.insert(key.into(), value.into());
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.options.fragment = fragment.into();
        self
    }

    fn page_url(&self, page: u32) -> Result<String> {
        let mut params = self.request_args.clone();
        params.insert(self.options.request_param.clone(), Value::from(page));
        for (key, value) in &self.options.url_kwargs {
            params.insert(key.clone(), value.clone());
        }
        let url = self.resolver.url_for(&self.endpoint, &params)?;
        Ok(format!("{url}{}", self.options.fragment))
    }

    fn step_item(&self, target: Option<u32>, enabled: bool, symbol: &str) -> Result<Element> {
        let href = match target {
            Some(page) if enabled => self.page_url(page)?,
            _ => "#".to_string(),
        };
        let mut item = html::li().class("page-item");
        if !enabled {
            item = item.class("disabled");
        }
        Ok(item.child(html::a().class("page-link").attr("href", href).child(symbol)))
    }

    fn page_item(&self, page: u32) -> Result<Element> {
        if page == self.cursor.page() {
            return Ok(html::li()
                .class("page-item active")
                .child(html::span().class("page-link").child(page)));
        }
        let href = self.page_url(page)?;
        Ok(html::li()
            .class("page-item")
            .child(html::a().class("page-link").attr("href", href).child(page)))
    }
}

impl Component for Pagination {
    fn name(&self) -> &'static str {
        "Pagination"
    }

    fn build(&self) -> Result<Node> {
        let cursor = &self.cursor;
        let mut list = html::ul()
            .class("pagination justify-content-center")
            .child(self.step_item(cursor.prev_num(), cursor.has_prev(), "&laquo;")?);

        for page in cursor.iter_pages().into_iter().flatten() {
            list = list.child(self.page_item(page)?);
        }

        list = list.child(self.step_item(cursor.next_num(), cursor.has_next(), "&raquo;")?);

        let nav = html::nav()
            .default_attr("aria-label", self.options.label.as_str())
            .child(list);
        Ok(self.props.apply(nav).into())
    }
}

impl_props!(Pagination);

/// In-memory [`PageCursor`] over a known item count.
///
/// Page windowing keeps two pages at each edge, two before the current page
/// and four after it; skipped runs are reported as a single `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl SimplePagination {
    const LEFT_EDGE: i64 = 2;
    const LEFT_CURRENT: i64 = 2;
    const RIGHT_CURRENT: i64 = 5;
    const RIGHT_EDGE: i64 = 2;

    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self {
            page,
            per_page,
            total,
        }
    }

    /// Number of pages, zero when `per_page` is zero
    pub fn pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

impl PageCursor for SimplePagination {
    fn page(&self) -> u32 {
        self.page
    }

    fn has_prev(&self) -> bool {
        self.page > 1
    }

    fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    fn prev_num(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    fn next_num(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    fn iter_pages(&self) -> Vec<Option<u32>> {
        let pages = self.pages();
        let current = i64::from(self.page);
        let last_page = i64::from(pages);
        let mut out = Vec::new();
        let mut last = 0i64;

        for num in 1..=pages {
            let n = i64::from(num);
            let visible = n <= Self::LEFT_EDGE
                || (current - Self::LEFT_CURRENT - 1 < n && n < current + Self::RIGHT_CURRENT)
                || n > last_page - Self::RIGHT_EDGE;
            if !visible {
                continue;
            }
            if last + 1 != n {
                out.push(None);
            }
            out.push(Some(num));
            last = n;
        }
        out
    }
}
