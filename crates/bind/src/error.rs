//! Binding errors

use thiserror::Error;

use tessera_value::ValueError;

/// Binding failures
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The input named a field the schema does not know
    #[error("Unknown field \"{name}\" on {type_name}")]
    UnknownField {
        type_name: &'static str,
        name: String,
    },

    /// The reader was asked for a token other than the one it holds
    #[error("Expected {expected} but was {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    /// A value could not be read as the requested type
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The derived path rejected the JSON text
    #[error("Invalid JSON: {0}")]
    Json(String),
}

impl BindError {
    pub fn unknown_field(type_name: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name,
            name: name.into(),
        }
    }

    pub const fn unexpected(expected: &'static str, found: &'static str) -> Self {
        Self::UnexpectedToken { expected, found }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownField { .. } => "BIND_UNKNOWN_FIELD",
            Self::UnexpectedToken { .. } => "BIND_UNEXPECTED_TOKEN",
            Self::Value(e) => e.code(),
            Self::Json(_) => "BIND_JSON",
        }
    }
}

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result alias for binding
pub type BindResult<T> = Result<T, BindError>;
