//! Value kinds.
//!
//! `ValueKind` is a lightweight classification of a [`Value`], used in error
//! messages and for cheap dispatch without borrowing the payload.
//!
//! ```rust
//! use tessera_value::{Value, ValueKind};
//!
//! let v = Value::from(2.5);
//! assert_eq!(v.kind(), ValueKind::Number);
//! assert!(ValueKind::Number.is_primitive());
//! assert_eq!(ValueKind::Array.json_name(), "JSON Array");
//! ```
use std::fmt::{self, Display, Formatter};

use crate::core::value::Value;

/// Represents the kind of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Get all available kinds
    pub const fn all() -> [Self; 6] {
        [
            Self::Null,
            Self::Boolean,
            Self::Number,
            Self::String,
            Self::Array,
            Self::Object,
        ]
    }

    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Boolean, number or string
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Boolean | Self::Number | Self::String)
    }

    /// Type name as it appears in diagnostics (`JsonObject`, `JsonNull`, ...)
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "JsonNull",
            Self::Boolean | Self::Number | Self::String => "JsonPrimitive",
            Self::Array => "JsonArray",
            Self::Object => "JsonObject",
        }
    }

    /// Shape name used by the `Not a ...` coercion errors
    pub const fn json_name(&self) -> &'static str {
        match self {
            Self::Null => "JSON Null",
            Self::Boolean | Self::Number | Self::String => "JSON Primitive",
            Self::Array => "JSON Array",
            Self::Object => "JSON Object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
