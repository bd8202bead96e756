//! Bootstrap components built from composable HTML elements
//!
//! This crate provides alerts, badges, buttons, cards, lists, dropdowns,
//! modals, pagination and form skeletons. Every component is a
//! [`Component`](bootlets_html::Component) whose `build()` returns plain
//! elements, so components nest freely inside elements and each other.

pub mod alert;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod container;
pub mod description_list;
pub mod dropdown;
pub mod form;
pub mod list;
pub mod modal;
pub mod pagination;
pub mod props;
pub mod table;

pub use alert::{Alert, AlertDismissButton, AlertHeading, AlertOptions};
pub use badge::{Badge, BadgeOptions, LinkBadge};
pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use button::{Button, ButtonGroup, ButtonGroupOptions, ButtonLink, ButtonOptions};
pub use card::{
    Card, CardBody, CardFooter, CardHeading, CardImage, CardText, ImageLocation,
};
pub use container::{Accordion, Container};
pub use description_list::{DescriptionList, DescriptionListOptions};
pub use dropdown::{
    Dropdown, DropdownButton, DropdownDivider, DropdownItem, DropdownMenu,
};
pub use form::{ButtonMap, FieldKind, FieldSource, FormField, FormSource, QuickForm, QuickFormOptions};
pub use list::{ListGroup, UnorderedList};
pub use modal::{Modal, ModalButton, ModalLink, ModalOptions};
pub use pagination::{
    EndpointResolver, PageCursor, Pagination, PaginationOptions, RequestArgs, SimplePagination,
};
pub use props::{Props, Size};
pub use table::Table;

pub use bootlets_html::{html, Component, Element, Node};
