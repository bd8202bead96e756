//! Form rendering over foreign field objects
//!
//! Field objects come from the host application (a form library, a schema
//! description, ...). They render their own `<label>` and `<input>` parts
//! through [`FieldSource`]; [`FormField`] arranges those parts into the
//! Bootstrap skeleton matching the field's [`FieldKind`].

use crate::container::Container;
use crate::props::{impl_props, Props};
use bootlets_core::{insert_attr, AttrMap, BootletsError, Result, Value};
use bootlets_html::{html, Component, Element, Node};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which skeleton a field is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Submit,
    Radio,
    /// A nested form rendered as a fieldset
    Form,
    Boolean,
    File,
    Hidden,
    Generic,
}

/// A form field owned by the host application.
///
/// `label` and `input` receive extra attributes (mostly `class`) to merge
/// into the markup they produce. Failures should be reported as
/// [`BootletsError::Field`](bootlets_core::BootletsError::Field).
pub trait FieldSource: fmt::Debug + Send + Sync {
    fn kind(&self) -> FieldKind;

    fn name(&self) -> &str;

    fn label(&self, attrs: &AttrMap) -> Result<Node>;

    fn input(&self, attrs: &AttrMap) -> Result<Node>;

    /// Choices of a radio field, each rendering its own input and label
    fn options(&self) -> Vec<Arc<dyn FieldSource>> {
        Vec::new()
    }

    /// Fields of a nested form
    fn subfields(&self) -> Vec<Arc<dyn FieldSource>> {
        Vec::new()
    }

    fn is_hidden(&self) -> bool {
        self.kind() == FieldKind::Hidden
    }
}

/// A form owned by the host application
pub trait FormSource: fmt::Debug + Send + Sync {
    fn fields(&self) -> Vec<Arc<dyn FieldSource>>;
}

/// Submit button contexts keyed by field name
pub type ButtonMap = IndexMap<String, String>;

fn class_attrs(class: impl Into<Value>) -> AttrMap {
    let mut attrs = AttrMap::new();
    insert_attr(&mut attrs, "class", class);
    attrs
}

/// One field in its Bootstrap skeleton
#[derive(Debug, Clone)]
pub struct FormField {
    field: Arc<dyn FieldSource>,
    button_map: ButtonMap,
    props: Props,
}

impl FormField {
    pub fn new(field: Arc<dyn FieldSource>) -> Self {
        Self {
            field,
            button_map: ButtonMap::new(),
            props: Props::default(),
        }
    }

    pub fn button_map(mut self, button_map: ButtonMap) -> Self {
        self.button_map = button_map;
        self
    }

    fn nested(&self, field: Arc<dyn FieldSource>) -> Node {
        FormField::new(field)
            .button_map(self.button_map.clone())
            .into()
    }

    /// Input attributes for a submit field: the button classes, then the
    /// caller's attributes
    fn submit_attrs(&self) -> AttrMap {
        let context = self
            .button_map
            .get(self.field.name())
            .map(String::as_str)
            .unwrap_or("primary");
        let mut attrs = class_attrs(format!("btn btn-{context}"));
        for (key, value) in &self.props.attrs {
            insert_attr(&mut attrs, key.clone(), value.clone());
        }
        attrs
    }
}

fn form_group() -> Element {
    html::div().default_attr("class", "form-group")
}

impl Component for FormField {
    fn name(&self) -> &'static str {
        "FormField"
    }

    /// Caller attributes go on the outermost element of the skeleton (the
    /// input itself for submit fields, every `.form-check` for radio
    /// options); caller children follow the generated parts.
    fn build(&self) -> Result<Node> {
        let field = &self.field;
        let none = AttrMap::new();
        let node = match field.kind() {
            FieldKind::Submit => {
                if !self.props.children.is_empty() {
                    return Err(BootletsError::Field {
                        field: field.name().to_string(),
                        message: "submit fields take no children".to_string(),
                    });
                }
                field.input(&self.submit_attrs())?
            }
            FieldKind::Radio => {
                let mut choices = Container::new();
                for option in field.options() {
                    choices = choices.child(
                        html::div()
                            .default_attr("class", "form-check")
                            .attrs(&self.props.attrs)
                            .child(option.input(&none)?)
                            .child(option.label(&none)?),
                    );
                }
                choices.children(self.props.children.iter().cloned()).into()
            }
            FieldKind::Form => {
                let subfields = field
                    .subfields()
                    .into_iter()
                    .filter(|sub| !sub.is_hidden())
                    .map(|sub| self.nested(sub));
                let fieldset = html::fieldset()
                    .child(html::legend().child(field.label(&none)?))
                    .children(subfields);
                self.props.apply(fieldset).into()
            }
            FieldKind::Boolean => {
                let group = html::div()
                    .default_attr("class", "form-group form-check")
                    .child(field.input(&class_attrs("form-check-input"))?)
                    .child(field.label(&class_attrs("form-check-label"))?);
                self.props.apply(group).into()
            }
            FieldKind::File => {
                let group = form_group()
                    .child(field.label(&none)?)
                    .child(field.input(&class_attrs("form-control-file"))?);
                self.props.apply(group).into()
            }
            FieldKind::Hidden => self.props.apply(form_group().child(field.input(&none)?)).into(),
            FieldKind::Generic if field.is_hidden() => {
                self.props.apply(form_group().child(field.input(&none)?)).into()
            }
            FieldKind::Generic => {
                let group = form_group()
                    .child(field.label(&none)?)
                    .child(field.input(&class_attrs("form-control"))?);
                self.props.apply(group).into()
            }
        };
        tracing::trace!(field = field.name(), kind = ?field.kind(), "rendered form field");
        Ok(node)
    }
}

impl_props!(FormField);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickFormOptions {
    pub action: String,
    pub method: String,
    pub enctype: Option<String>,
    pub id: Option<String>,
    pub novalidate: bool,
    pub button_map: ButtonMap,
}

impl Default for QuickFormOptions {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            enctype: None,
            id: None,
            novalidate: false,
            button_map: ButtonMap::new(),
        }
    }
}

/// A whole `<form>` with one [`FormField`] per field, one per line
#[derive(Debug, Clone)]
pub struct QuickForm {
    form: Arc<dyn FormSource>,
    options: QuickFormOptions,
    props: Props,
}

impl QuickForm {
    pub fn new(form: Arc<dyn FormSource>) -> Self {
        Self {
            form,
            options: QuickFormOptions::default(),
            props: Props::default(),
        }
    }

    pub fn with_options(mut self, options: QuickFormOptions) -> Self {
        self.options = options;
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.options.action = action.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.options.method = method.into();
        self
    }

    pub fn enctype(mut self, enctype: impl Into<String>) -> Self {
        self.options.enctype = Some(enctype.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.options.id = Some(id.into());
        self
    }

    pub fn novalidate(mut self, novalidate: bool) -> Self {
        self.options.novalidate = novalidate;
        self
    }

    pub fn button_map(mut self, button_map: ButtonMap) -> Self {
        self.options.button_map = button_map;
        self
    }
}

impl Component for QuickForm {
    fn name(&self) -> &'static str {
        "QuickForm"
    }

    fn build(&self) -> Result<Node> {
        let options = &self.options;
        let fields = self.form.fields().into_iter().map(|field| {
            FormField::new(field).button_map(options.button_map.clone())
        });

        let form = html::form()
            .default_attr("action", options.action.as_str())
            .default_attr("method", options.method.as_str())
            .default_attr("enctype", options.enctype.clone())
            .default_attr("id", options.id.clone())
            .default_attr("novalidate", options.novalidate)
            .child(Container::new().children(fields));
        Ok(self.props.apply(form).into())
    }
}

impl_props!(QuickForm);
