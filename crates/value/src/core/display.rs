//! Canonical JSON rendering
//!
//! `Display` for every value writes compact JSON text: no whitespace, object
//! members in insertion order, strings escaped for embedding in JSON.

use std::fmt::{self, Write};

use crate::collections::{Array, Object};
use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_json_string(f, s),
            Value::Array(a) => write_array(f, a),
            Value::Object(o) => write_object(f, o),
        }
    }
}

pub(crate) fn write_array(f: &mut fmt::Formatter<'_>, array: &Array) -> fmt::Result {
    f.write_char('[')?;
    for (i, item) in array.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{item}")?;
    }
    f.write_char(']')
}

pub(crate) fn write_object(f: &mut fmt::Formatter<'_>, object: &Object) -> fmt::Result {
    f.write_char('{')?;
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write_json_string(f, key)?;
        write!(f, ":{value}")?;
    }
    f.write_char('}')
}

/// Write `s` as a double-quoted JSON string literal
pub fn write_json_string(out: &mut impl Write, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        let escape = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{08}' => "\\b",
            '\u{0c}' => "\\f",
            '\u{2028}' => "\\u2028",
            '\u{2029}' => "\\u2029",
            c if c < ' ' => "",
            _ => continue,
        };
        out.write_str(&s[start..i])?;
        if escape.is_empty() {
            write!(out, "\\u{:04x}", c as u32)?;
        } else {
            out.write_str(escape)?;
        }
        start = i + c.len_utf8();
    }
    out.write_str(&s[start..])?;
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(s: &str) -> String {
        let mut out = String::new();
        write_json_string(&mut out, s).unwrap();
        out
    }

    #[test]
    fn test_primitives() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from("hello").to_string(), "\"hello\"");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(quoted(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(quoted("line\nbreak\ttab"), r#""line\nbreak\ttab""#);
        assert_eq!(quoted("\u{01}\u{1f}"), r#""\u0001\u001f""#);
        assert_eq!(quoted("\u{08}\u{0c}\r"), r#""\b\f\r""#);
        assert_eq!(quoted("sep\u{2028}"), r#""sep\u2028""#);
        assert_eq!(quoted("héllo ✓"), "\"héllo ✓\"");
    }

    #[test]
    fn test_nested_containers() {
        let mut inner = Object::new();
        inner.insert_string("k\"ey", "v");
        inner.insert("n", None);
        let mut array = Array::new();
        array.push(inner);
        array.push(Array::new());
        array.push(Object::new());
        assert_eq!(array.to_string(), r#"[{"k\"ey":"v","n":null},[],{}]"#);
    }
}
