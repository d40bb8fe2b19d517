//! Value Error Types
//!
//! Every failure in this crate is local to the operation that detects it and
//! is surfaced as a [`ValueError`]. Nothing here retries or substitutes a
//! default value.

use thiserror::Error;

use crate::core::kind::ValueKind;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Value operation errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Index outside `[0, length)` on get/set/remove
    #[error("Index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Coercion to a container shape the value does not have.
    /// `actual` is the canonical render of the offending value.
    #[error("Not a {expected}: {actual}")]
    NotA {
        expected: &'static str,
        actual: String,
    },

    /// Scalar coercion of an array that does not hold exactly one element
    #[error("Array must have size 1, but has size {size}")]
    ArraySize { size: usize },

    /// Text could not be read as the requested number
    #[error("For input string: \"{input}\"")]
    NumberFormat { input: String },

    /// Scalar coercion of a kind that has no scalar reading (object, null).
    /// The message is the kind name alone; `target` is the requested type.
    #[error("{kind}")]
    Unsupported {
        kind: ValueKind,
        target: &'static str,
    },

    /// JSON text handed to the serde bridge was malformed
    #[error("Invalid JSON: {0}")]
    Parse(String),
}

/// Coarse classification of a [`ValueError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Index out of range
    Bounds,
    /// Value has the wrong shape or size for the requested read
    State,
    /// Text failed to parse
    Format,
    /// Operation is not defined for the value kind
    Unsupported,
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Create a shape mismatch error for a container coercion
    pub fn not_a(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::NotA {
            expected,
            actual: actual.into(),
        }
    }

    /// Create a single-element coercion error
    pub fn array_size(size: usize) -> Self {
        Self::ArraySize { size }
    }

    /// Create a number format error quoting the offending text
    pub fn number_format(input: impl Into<String>) -> Self {
        Self::NumberFormat {
            input: input.into(),
        }
    }

    /// Create an unsupported coercion error
    pub fn unsupported(kind: ValueKind, target: &'static str) -> Self {
        Self::Unsupported { kind, target }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ValueError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::IndexOutOfBounds { .. } => "VALUE_INDEX_OUT_OF_BOUNDS",
            Self::NotA { .. } => "VALUE_NOT_A",
            Self::ArraySize { .. } => "VALUE_ARRAY_SIZE",
            Self::NumberFormat { .. } => "VALUE_NUMBER_FORMAT",
            Self::Unsupported { .. } => "VALUE_UNSUPPORTED",
            Self::Parse(_) => "VALUE_PARSE_ERROR",
        }
    }

    /// Which family this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            Self::NotA { .. } | Self::ArraySize { .. } => ErrorCategory::State,
            Self::NumberFormat { .. } | Self::Parse(_) => ErrorCategory::Format,
            Self::Unsupported { .. } => ErrorCategory::Unsupported,
        }
    }

    /// Check if this is a bounds error
    pub fn is_bounds(&self) -> bool {
        self.category() == ErrorCategory::Bounds
    }

    /// Check if this is a state error
    pub fn is_state(&self) -> bool {
        self.category() == ErrorCategory::State
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        self.category() == ErrorCategory::Format
    }

    /// Check if this is an unsupported-operation error
    pub fn is_unsupported(&self) -> bool {
        self.category() == ErrorCategory::Unsupported
    }
}

// ============================================================================
// EXTERNAL ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for ValueError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

/// Result type alias for value operations
pub type ValueResult<T> = Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds() {
        let err = ValueError::index_out_of_bounds(5, 3);
        assert_eq!(err.code(), "VALUE_INDEX_OUT_OF_BOUNDS");
        assert_eq!(err.to_string(), "Index 5 out of bounds for length 3");
        assert!(err.is_bounds());
    }

    #[test]
    fn test_not_a() {
        let err = ValueError::not_a("JSON Array", "\"hello\"");
        assert_eq!(err.to_string(), "Not a JSON Array: \"hello\"");
        assert!(err.is_state());
    }

    #[test]
    fn test_array_size() {
        let err = ValueError::array_size(2);
        assert_eq!(err.to_string(), "Array must have size 1, but has size 2");
        assert_eq!(err.category(), ErrorCategory::State);
    }

    #[test]
    fn test_number_format() {
        let err = ValueError::number_format("hello");
        assert_eq!(err.to_string(), "For input string: \"hello\"");
        assert!(err.is_format());
    }

    #[test]
    fn test_unsupported_names_kind() {
        let err = ValueError::unsupported(ValueKind::Object, "boolean");
        assert_eq!(err.to_string(), "JsonObject");
        assert!(matches!(err, ValueError::Unsupported { target: "boolean", .. }));
        assert!(err.is_unsupported());
        assert_eq!(err.code(), "VALUE_UNSUPPORTED");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let value_err: ValueError = json_err.into();
        assert!(matches!(value_err, ValueError::Parse(_)));
        assert!(value_err.is_format());
    }
}
