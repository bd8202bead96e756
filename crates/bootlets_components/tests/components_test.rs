//! Integration tests for the component library.
//!
//! These build components through the public API only and check the
//! rendered markup, including whole pages that mix components, elements
//! and raw text.

use bootlets_components::*;
use bootlets_core::{AttrMap, BootletsError, Result, Value};
use indexmap::IndexMap;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ============================================================================
// Documented component behaviour
// ============================================================================

#[test]
fn test_button_context_size_outline() {
    let button = Button::new().context("danger").size(Size::Lg).outline(true).child("Delete");
    assert_eq!(
        Node::from(button).render().unwrap(),
        r#"<button type="button" class="btn btn-lg btn-outline-danger">Delete</button>"#
    );
}

#[test]
fn test_unordered_list_items_in_order() {
    let html = Node::from(UnorderedList::new().children(["a", "b", "c"]))
        .render()
        .unwrap();
    assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn test_breadcrumb_only_last_active() {
    let html = Node::from(Breadcrumb::new().children(["Home", "Library", "Data"]))
        .render()
        .unwrap();
    assert_eq!(html.matches("active").count(), 1);
    assert!(html.contains(r#"<li class="breadcrumb-item active" aria-current="page">Data</li>"#));
    assert!(html.contains(r#"<li class="breadcrumb-item">Home</li>"#));
    assert!(html.contains(r#"<li class="breadcrumb-item">Library</li>"#));
}

#[test]
fn test_description_list_pairs_in_order() {
    let mut person = IndexMap::new();
    person.insert("Name".to_string(), Value::from("Bob"));
    person.insert("Age".to_string(), Value::from("42"));

    let html = Node::from(DescriptionList::new(person)).render().unwrap();
    assert_eq!(html.matches("<dt").count(), 2);
    assert_eq!(html.matches("<dd").count(), 2);
    let name = html.find(">Name</dt>").unwrap();
    let bob = html.find(">Bob</dd>").unwrap();
    let age = html.find(">Age</dt>").unwrap();
    assert!(name < bob && bob < age);
}

#[test]
fn test_description_list_rejects_scalars() {
    let err = Node::from(DescriptionList::new(7)).render().unwrap_err();
    assert!(matches!(err, BootletsError::Type { .. }));
}

#[test]
fn test_empty_container_is_empty_string() {
    assert_eq!(Node::from(Container::new()).render().unwrap(), "");
}

#[derive(Debug)]
struct PathResolver;

impl EndpointResolver for PathResolver {
    fn url_for(&self, endpoint: &str, params: &AttrMap) -> Result<String> {
        let page = params.get("page").map(Value::to_string).unwrap_or_default();
        Ok(format!("/{endpoint}/{page}"))
    }
}

/// Cursor with explicit flags, independent of any page arithmetic
#[derive(Debug)]
struct FixedCursor {
    page: u32,
    has_prev: bool,
    has_next: bool,
    pages: Vec<Option<u32>>,
}

impl PageCursor for FixedCursor {
    fn page(&self) -> u32 {
        self.page
    }

    fn has_prev(&self) -> bool {
        self.has_prev
    }

    fn has_next(&self) -> bool {
        self.has_next
    }

    fn prev_num(&self) -> Option<u32> {
        self.has_prev.then(|| self.page - 1)
    }

    fn next_num(&self) -> Option<u32> {
        self.has_next.then(|| self.page + 1)
    }

    fn iter_pages(&self) -> Vec<Option<u32>> {
        self.pages.clone()
    }
}

#[test]
fn test_pagination_without_prev() {
    let cursor = FixedCursor {
        page: 1,
        has_prev: false,
        has_next: true,
        pages: vec![Some(1), Some(2), None, Some(9)],
    };
    let html = Node::from(Pagination::new(Arc::new(cursor), Arc::new(PathResolver), "posts"))
        .render()
        .unwrap();

    assert!(html.contains(r##"<li class="page-item disabled"><a href="#" class="page-link">&laquo;</a></li>"##));
    assert!(html.contains(r#"<li class="page-item"><a href="/posts/2" class="page-link">&raquo;</a></li>"#));
    assert_eq!(html.matches("disabled").count(), 1);
    assert!(html.contains(r#"<a href="/posts/9" class="page-link">9</a>"#));
    assert_eq!(html.matches("page-item").count(), 5);
}

// ============================================================================
// Composition
// ============================================================================

fn page() -> Node {
    let nav = Breadcrumb::new().children(["Home", "Reports"]);
    let alert = Alert::new()
        .context("warning")
        .child(AlertHeading::new().child("Heads up"))
        .child("Quarterly numbers are provisional.")
        .child(AlertDismissButton::new());
    let card = Card::new()
        .child(CardHeading::header().child("Summary"))
        .child(
            CardBody::new()
                .child(CardHeading::title().child("Revenue"))
                .child(CardText::new().child("Up ").child(Badge::pill().context("success").child("12%")))
                .child(ButtonLink::new().attr("href", "/reports/q3").child("Details")),
        );
    let table = Table::new()
        .headers(["Region", "Total"])
        .row([Node::from("North"), Node::from(120)])
        .row([Node::from("South"), Node::from(95)]);

    Node::from(
        html::div()
            .class("container")
            .child(nav)
            .child(alert)
            .child(card)
            .child(table)
            .child(Modal::new().id("help").title("Help").child("Ask the team.")),
    )
}

#[test]
fn test_full_page_renders() {
    init_tracing();
    let html = page().render().unwrap();

    assert!(html.starts_with(r#"<div class="container"><nav aria-label="breadcrumb">"#));
    assert!(html.contains(r#"<div role="alert" class="alert alert-warning"><h4 class="alert-heading">Heads up</h4>"#));
    assert!(html.contains(r#"<span class="badge badge-pill badge-success">12%</span>"#));
    assert!(html.contains(r#"<h4 class="card-header">Summary</h4>"#));
    assert!(html.contains(r#"<h5 class="card-title">Revenue</h5>"#));
    assert!(html.contains("<td>North</td><td>120</td>"));
    assert!(html.contains(r#"id="Modal_help""#));
    assert!(html.ends_with("</div>"));
}

#[test]
fn test_full_page_is_deterministic() {
    assert_eq!(page().render().unwrap(), page().render().unwrap());
    let tree = page();
    assert_eq!(tree.render().unwrap(), tree.render().unwrap());
}

#[test]
fn test_memoized_component_renders_like_plain() {
    let plain = Node::from(Alert::new().child("x")).render().unwrap();
    let memo = Node::memo(Alert::new().child("x"));
    assert_eq!(memo.render().unwrap(), plain);
    assert_eq!(memo.render().unwrap(), plain);
}

#[test]
fn test_dropdown_inside_button_group() {
    let group = ButtonGroup::new()
        .child(Button::new().child("Save"))
        .child(
            Dropdown::new()
                .class("btn-group")
                .child(DropdownButton::new().child("More"))
                .child(DropdownMenu::new().child(DropdownItem::new().child("Export"))),
        );
    let html = Node::from(group).render().unwrap();
    assert!(html.contains(r#"<div class="dropdown btn-group">"#));
    assert!(html.contains(r##"<a href="#" class="dropdown-item">Export</a>"##));
}

#[test]
fn test_list_group_with_link_badges() {
    let group = ListGroup::new()
        .child(html::span().child("Inbox ").child(LinkBadge::new().href("/inbox").child("3")))
        .child("Archive");
    let html = Node::from(group).render().unwrap();
    assert!(html.contains(r#"<a href="/inbox" class="badge badge-primary">3</a>"#));
    assert_eq!(html.matches(r#"class="list-group-item""#).count(), 2);
}

#[test]
fn test_options_loaded_from_json() {
    let options: ButtonOptions =
        serde_json::from_str(r#"{"context": "info", "size": "sm", "block": true}"#).unwrap();
    let html = Node::from(Button::with_options(options).child("Go")).render().unwrap();
    assert!(html.contains(r#"class="btn btn-sm btn-info btn-block""#));

    let content: serde_json::Value =
        serde_json::from_str(r#"[["Host", "db-1"], ["Port", 5432]]"#).unwrap();
    let html = Node::from(DescriptionList::new(content)).render().unwrap();
    assert!(html.contains(r#"<dd class="col-sm-9">5432</dd>"#));
}
