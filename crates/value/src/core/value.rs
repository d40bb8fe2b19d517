//! Unified Value enum over the JSON variants
//!
//! This is the central type of the crate. Scalars are read through the
//! fallible `to_*` coercions, containers through `as_array` / `as_object`.

use std::str::FromStr;

use crate::collections::{Array, Object};
use crate::core::kind::ValueKind;
use crate::error::{ValueError, ValueResult};
use crate::scalar::Number;

/// A JSON value
///
/// `Null` is an ordinary variant, so containers never hold an absent slot:
/// every nullable insertion stores `Value::Null` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Value {
    /// JSON null
    #[default]
    Null,

    /// `true` / `false`
    Boolean(bool),

    /// Any number, stored at the width it was built with
    Number(Number),

    /// UTF-8 text
    String(String),

    /// Ordered sequence of values
    Array(Array),

    /// Insertion-ordered name/value map with unique names
    Object(Object),
}

impl Value {
    /// The null value
    pub const NULL: Value = Value::Null;

    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create a number value
    pub fn number(v: impl Into<Number>) -> Self {
        Self::Number(v.into())
    }

    /// Create a string value
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create an empty array value
    pub fn array_empty() -> Self {
        Self::Array(Array::new())
    }

    /// Create an empty object value
    pub fn object_empty() -> Self {
        Self::Object(Object::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Boolean, number or string
    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.kind().is_primitive()
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Borrow the text of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Recursive copy; container children are freshly allocated.
    ///
    /// Primitives are immutable, so for them this is a plain clone.
    pub fn deep_copy(&self) -> Self {
        match self {
            Self::Array(a) => Self::Array(a.deep_copy()),
            Self::Object(o) => Self::Object(o.deep_copy()),
            primitive => primitive.clone(),
        }
    }

    // ==================== Container coercions ====================

    /// Borrow as an array
    pub fn as_array(&self) -> ValueResult<&Array> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.not_a(ValueKind::Array)),
        }
    }

    /// Mutably borrow as an array
    pub fn as_array_mut(&mut self) -> ValueResult<&mut Array> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.not_a(ValueKind::Array)),
        }
    }

    /// Unwrap into an array
    pub fn into_array(self) -> ValueResult<Array> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.not_a(ValueKind::Array)),
        }
    }

    /// Borrow as an object
    pub fn as_object(&self) -> ValueResult<&Object> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(other.not_a(ValueKind::Object)),
        }
    }

    /// Mutably borrow as an object
    pub fn as_object_mut(&mut self) -> ValueResult<&mut Object> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(other.not_a(ValueKind::Object)),
        }
    }

    /// Unwrap into an object
    pub fn into_object(self) -> ValueResult<Object> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(other.not_a(ValueKind::Object)),
        }
    }

    /// Succeeds only for `Null`
    pub fn as_null(&self) -> ValueResult<()> {
        match self {
            Self::Null => Ok(()),
            other => Err(other.not_a(ValueKind::Null)),
        }
    }

    fn not_a(&self, expected: ValueKind) -> ValueError {
        ValueError::not_a(expected.json_name(), self.to_string())
    }

    // ==================== Scalar coercions ====================

    /// Read as a boolean.
    ///
    /// Strings read as `true` only for a case-insensitive `"true"`; numbers
    /// always read as `false`.
    pub fn to_boolean(&self) -> ValueResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::String(s) => Ok(s.eq_ignore_ascii_case("true")),
            Self::Number(_) => Ok(false),
            Self::Array(a) => a.to_boolean(),
            Self::Null | Self::Object(_) => Err(ValueError::unsupported(self.kind(), "boolean")),
        }
    }

    /// Read as text; numbers and booleans render to their literal form
    pub fn to_text(&self) -> ValueResult<String> {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Boolean(b) => Ok(b.to_string()),
            Self::Number(n) => Ok(n.to_string()),
            Self::Array(a) => a.to_text(),
            Self::Null | Self::Object(_) => Err(ValueError::unsupported(self.kind(), "string")),
        }
    }

    /// Read as a [`Number`]; strings must hold a valid numeric literal
    pub fn to_number(&self) -> ValueResult<Number> {
        match self {
            Self::Number(n) => Ok(n.clone()),
            Self::String(s) => Number::parse(s),
            Self::Array(a) => a.to_number(),
            Self::Null | Self::Boolean(_) | Self::Object(_) => {
                Err(ValueError::unsupported(self.kind(), "number"))
            }
        }
    }

    pub fn to_f64(&self) -> ValueResult<f64> {
        self.scalar("double", Number::to_f64, |s| parse_decimal(s, f64::is_finite))
    }

    pub fn to_f32(&self) -> ValueResult<f32> {
        self.scalar("float", Number::to_f32, |s| parse_decimal(s, f32::is_finite))
    }

    pub fn to_i64(&self) -> ValueResult<i64> {
        self.scalar("long", Number::to_i64, |s| s.parse().ok())
    }

    pub fn to_i32(&self) -> ValueResult<i32> {
        self.scalar("int", Number::to_i32, |s| s.parse().ok())
    }

    pub fn to_i16(&self) -> ValueResult<i16> {
        self.scalar("short", Number::to_i16, |s| s.parse().ok())
    }

    pub fn to_i8(&self) -> ValueResult<i8> {
        self.scalar("byte", Number::to_i8, |s| s.parse().ok())
    }

    /// Shared numeric read: numbers narrow, text parses strictly (booleans
    /// parse their literal and therefore fail), arrays defer to their sole
    /// element.
    fn scalar<T>(
        &self,
        target: &'static str,
        narrow: impl FnOnce(&Number) -> T,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> ValueResult<T> {
        match self {
            Self::Number(n) => Ok(narrow(n)),
            Self::String(s) => parse(s.as_str()).ok_or_else(|| ValueError::number_format(s.as_str())),
            Self::Boolean(b) => {
                let literal = if *b { "true" } else { "false" };
                parse(literal).ok_or_else(|| ValueError::number_format(literal))
            }
            Self::Array(a) => a.sole()?.scalar(target, narrow, parse),
            Self::Null | Self::Object(_) => Err(ValueError::unsupported(self.kind(), target)),
        }
    }
}

/// Decimal text to float. Non-finite results need a digit (overflow such as
/// `1e400`) or one of the literal spellings `NaN`, `Infinity`, `+Infinity`
/// and `-Infinity`; the shorthand `inf` and `nan` forms are rejected.
fn parse_decimal<T: FromStr + Copy>(text: &str, is_finite: fn(T) -> bool) -> Option<T> {
    let trimmed = text.trim();
    let value: T = trimmed.parse().ok()?;
    let spelled = matches!(trimmed, "NaN" | "Infinity" | "+Infinity" | "-Infinity");
    let numeric = trimmed.bytes().any(|b| b.is_ascii_digit());
    (is_finite(value) || spelled || numeric).then_some(value)
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::Number(Number::from(v))
            }
        }
    )*};
}

from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

/// `None` becomes `Value::Null`
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let val = Value::null();
        assert!(val.is_null());
        assert_eq!(val, Value::NULL);
        assert_eq!(val.kind(), ValueKind::Null);
    }

    #[test]
    fn test_value_from_conversions() {
        assert!(Value::from(42).is_number());
        assert!(Value::from(2.5).is_number());
        assert!(Value::from("hello").is_string());
        assert!(Value::from(true).is_boolean());
        assert_eq!(Value::from('o'), Value::string("o"));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::string("x"));
        assert!(Value::from(vec![1, 2]).is_array());
    }

    #[test]
    fn test_cross_variant_never_equal() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(0), Value::from(false));
        assert_ne!(Value::Null, Value::from(""));
        assert_ne!(Value::array_empty(), Value::object_empty());
    }

    #[test]
    fn test_to_boolean() {
        assert!(Value::from(true).to_boolean().unwrap());
        assert!(Value::from("TRUE").to_boolean().unwrap());
        assert!(!Value::from("yes").to_boolean().unwrap());
        assert!(!Value::from(1).to_boolean().unwrap());
        assert!(Value::Null.to_boolean().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::from(12.5).to_text().unwrap(), "12.5");
        assert_eq!(Value::from(false).to_text().unwrap(), "false");
        assert_eq!(Value::from("a\"b").to_text().unwrap(), "a\"b");
        let err = Value::object_empty().to_text().unwrap_err();
        assert_eq!(err, ValueError::unsupported(ValueKind::Object, "string"));
    }

    #[test]
    fn test_numeric_from_string() {
        assert_eq!(Value::from("42").to_i32().unwrap(), 42);
        assert_eq!(Value::from(" 2.5 ").to_f64().unwrap(), 2.5);
        assert_eq!(Value::from("-7").to_i64().unwrap(), -7);
        assert_eq!(
            Value::from("128").to_i8().unwrap_err(),
            ValueError::number_format("128")
        );
        assert_eq!(
            Value::from("hello").to_f64().unwrap_err().to_string(),
            "For input string: \"hello\""
        );
    }

    #[test]
    fn test_numeric_from_boolean_fails_with_literal() {
        assert_eq!(
            Value::from(true).to_i32().unwrap_err(),
            ValueError::number_format("true")
        );
    }

    #[test]
    fn test_numeric_narrowing() {
        assert_eq!(Value::from(3.7).to_i32().unwrap(), 3);
        assert_eq!(Value::from(70_000).to_i16().unwrap(), 4464);
        assert_eq!(Value::from(255).to_i8().unwrap(), -1);
        assert_eq!(Value::from(i64::MAX).to_i32().unwrap(), -1);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Value::from("2323").to_number().unwrap(), Number::from(2323));
        assert!(Value::from("abc").to_number().unwrap_err().is_format());
        assert!(Value::from(true).to_number().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_container_coercions() {
        let err = Value::from("hello").as_array().unwrap_err();
        assert_eq!(err.to_string(), "Not a JSON Array: \"hello\"");
        assert!(err.is_state());

        let err = Value::from(1).as_object().unwrap_err();
        assert_eq!(err.to_string(), "Not a JSON Object: 1");

        let err = Value::from(false).as_null().unwrap_err();
        assert_eq!(err.to_string(), "Not a JSON Null: false");
        assert!(Value::Null.as_null().is_ok());
    }

    #[test]
    fn test_as_array_mut_allows_in_place_edit() {
        let mut v = Value::array_empty();
        v.as_array_mut().unwrap().add_number(1);
        assert_eq!(v.to_string(), "[1]");
    }

    #[test]
    fn test_float_text_rejects_shorthand_non_finite() {
        for text in ["inf", "-inf", "nan", "infinity", "INF", "Nan"] {
            let err = Value::from(text).to_f64().unwrap_err();
            assert_eq!(err, ValueError::number_format(text));
            assert!(Value::from(text).to_f32().is_err());
        }
    }

    #[test]
    fn test_float_text_accepts_literal_non_finite() {
        assert_eq!(Value::from("Infinity").to_f64().unwrap(), f64::INFINITY);
        assert_eq!(Value::from("+Infinity").to_f32().unwrap(), f32::INFINITY);
        assert_eq!(Value::from(" -Infinity ").to_f64().unwrap(), f64::NEG_INFINITY);
        assert!(Value::from("NaN").to_f64().unwrap().is_nan());
        assert!(Value::from("NaN").to_f32().unwrap().is_nan());
        assert_eq!(Value::from("1e400").to_f64().unwrap(), f64::INFINITY);
        assert_eq!(Value::from("2.5").to_f32().unwrap(), 2.5);
    }

    #[test]
    fn test_null_scalar_coercion_unsupported() {
        for err in [Value::Null.to_boolean().unwrap_err(), Value::Null.to_i64().unwrap_err()] {
            assert!(err.is_unsupported());
            assert_eq!(err.to_string(), "JsonNull");
        }
    }

    #[test]
    fn test_object_scalar_coercion_unsupported() {
        let v = Value::object_empty();
        for err in [
            v.to_boolean().unwrap_err(),
            v.to_f64().unwrap_err(),
            v.to_number().unwrap_err(),
        ] {
            assert!(err.is_unsupported());
            assert_eq!(err.to_string(), "JsonObject");
        }
    }
}
