//! Error types for bootlets

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BootletsError>;

#[derive(Debug, Error)]
pub enum BootletsError {
    /// Positional arguments did not match the declared binding contract
    #[error("{component}() takes {expected} positional arguments but {given} were given")]
    Arity {
        component: String,
        expected: usize,
        given: usize,
    },

    /// A component received an argument of the wrong shape
    #[error("{component}() expected {expected}, got {found}")]
    Type {
        component: String,
        expected: String,
        found: String,
    },

    /// A named tag or capability is not registered
    #[error("Unable to find {kind} '{name}'")]
    Lookup { kind: &'static str, name: String },

    /// The endpoint resolver failed to build a URL
    #[error("Failed to resolve endpoint '{endpoint}': {message}")]
    Endpoint { endpoint: String, message: String },

    /// A form field collaborator failed to produce a part
    #[error("Form field '{field}' error: {message}")]
    Field { field: String, message: String },

    #[error("Render error: {0}")]
    RenderError(String),
}

impl BootletsError {
    pub fn type_error(
        component: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        BootletsError::Type {
            component: component.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn lookup(kind: &'static str, name: impl Into<String>) -> Self {
        BootletsError::Lookup {
            kind,
            name: name.into(),
        }
    }
}
