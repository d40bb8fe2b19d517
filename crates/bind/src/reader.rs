//! Pull-style token reading.
//!
//! [`TokenReader`] is the cursor a schema drives while binding an object:
//! open the object, alternate names and values until `has_next` is false,
//! then close it. [`ValueReader`] walks an in-memory [`Value`] tree.

use std::iter::Peekable;

use indexmap::map::IntoIter;
use tessera_value::{Value, ValueError};

use crate::error::{BindError, BindResult};

/// Cursor over the members of one JSON object
pub trait TokenReader {
    /// Enter the object
    fn begin_object(&mut self) -> BindResult<()>;

    /// Leave the object; every member must have been consumed
    fn end_object(&mut self) -> BindResult<()>;

    /// Whether a member (or a pending value) remains
    fn has_next(&mut self) -> bool;

    /// Next member name; its value becomes pending
    fn next_name(&mut self) -> BindResult<String>;

    /// Pending value as an exact 64-bit integer
    fn next_long(&mut self) -> BindResult<i64>;

    /// Pending value as an exact 32-bit integer
    fn next_int(&mut self) -> BindResult<i32>;

    /// Pending value as a boolean literal
    fn next_boolean(&mut self) -> BindResult<bool>;

    /// Pending value as text; numbers yield their literal
    fn next_string(&mut self) -> BindResult<String>;
}

enum State {
    Ready(Value),
    InObject {
        members: Peekable<IntoIter<String, Value>>,
        pending: Option<Value>,
    },
    Closed,
}

/// [`TokenReader`] over a parsed value tree
pub struct ValueReader {
    state: State,
}

impl ValueReader {
    pub fn new(root: impl Into<Value>) -> Self {
        Self {
            state: State::Ready(root.into()),
        }
    }

    /// Parse `json` and read from the resulting tree
    pub fn from_json(json: &str) -> BindResult<Self> {
        Ok(Self::new(json.parse::<Value>()?))
    }

    fn take_value(&mut self, expected: &'static str) -> BindResult<Value> {
        match &mut self.state {
            State::InObject { pending, members } => match pending.take() {
                Some(value) => Ok(value),
                None => {
                    let found = if members.peek().is_some() { "a name" } else { "end of object" };
                    Err(BindError::unexpected(expected, found))
                }
            },
            State::Ready(_) => Err(BindError::unexpected(expected, "begin of object")),
            State::Closed => Err(BindError::unexpected(expected, "end of document")),
        }
    }
}

impl std::fmt::Debug for ValueReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Ready(_) => "ready",
            State::InObject { .. } => "in-object",
            State::Closed => "closed",
        };
        f.debug_struct("ValueReader").field("state", &state).finish()
    }
}

/// How a value is named in token errors
fn token_name(value: &Value) -> &'static str {
    value.kind().json_name()
}

fn exact_long(value: &Value) -> BindResult<i64> {
    let text = value.to_text()?;
    if let Ok(v) = text.trim().parse::<i64>() {
        return Ok(v);
    }
    let float = value.to_f64()?;
    let long = float as i64;
    if long as f64 == float {
        Ok(long)
    } else {
        Err(ValueError::number_format(text).into())
    }
}

impl TokenReader for ValueReader {
    fn begin_object(&mut self) -> BindResult<()> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Ready(value) => {
                let object = value.into_object()?;
                self.state = State::InObject {
                    members: object.into_iter().peekable(),
                    pending: None,
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(BindError::unexpected("begin of object", "an open object"))
            }
        }
    }

    fn end_object(&mut self) -> BindResult<()> {
        let result = match &mut self.state {
            State::InObject { pending: Some(_), .. } => {
                Err(BindError::unexpected("end of object", "a value"))
            }
            State::InObject { members, .. } => {
                if members.peek().is_some() {
                    Err(BindError::unexpected("end of object", "a name"))
                } else {
                    Ok(())
                }
            }
            State::Ready(_) => Err(BindError::unexpected("end of object", "begin of object")),
            State::Closed => Err(BindError::unexpected("end of object", "end of document")),
        };
        if result.is_ok() {
            self.state = State::Closed;
        }
        result
    }

    fn has_next(&mut self) -> bool {
        match &mut self.state {
            State::InObject { members, pending } => pending.is_some() || members.peek().is_some(),
            State::Ready(_) | State::Closed => false,
        }
    }

    fn next_name(&mut self) -> BindResult<String> {
        match &mut self.state {
            State::InObject { pending: Some(_), .. } => {
                Err(BindError::unexpected("a name", "a value"))
            }
            State::InObject { members, pending } => match members.next() {
                Some((name, value)) => {
                    *pending = Some(value);
                    Ok(name)
                }
                None => Err(BindError::unexpected("a name", "end of object")),
            },
            State::Ready(_) => Err(BindError::unexpected("a name", "begin of object")),
            State::Closed => Err(BindError::unexpected("a name", "end of document")),
        }
    }

    fn next_long(&mut self) -> BindResult<i64> {
        match self.take_value("a long")? {
            value @ (Value::Number(_) | Value::String(_)) => exact_long(&value),
            other => Err(BindError::unexpected("a long", token_name(&other))),
        }
    }

    fn next_int(&mut self) -> BindResult<i32> {
        match self.take_value("an int")? {
            value @ (Value::Number(_) | Value::String(_)) => {
                let long = exact_long(&value)?;
                match i32::try_from(long) {
                    Ok(int) => Ok(int),
                    Err(_) => Err(ValueError::number_format(value.to_text()?).into()),
                }
            }
            other => Err(BindError::unexpected("an int", token_name(&other))),
        }
    }

    fn next_boolean(&mut self) -> BindResult<bool> {
        match self.take_value("a boolean")? {
            Value::Boolean(b) => Ok(b),
            other => Err(BindError::unexpected("a boolean", token_name(&other))),
        }
    }

    fn next_string(&mut self) -> BindResult<String> {
        match self.take_value("a string")? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(BindError::unexpected("a string", token_name(&other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reader(json: &str) -> ValueReader {
        ValueReader::from_json(json).unwrap()
    }

    #[test]
    fn test_walks_members_in_order() {
        let mut r = reader(r#"{"a": 1, "b": "two", "c": true}"#);
        r.begin_object().unwrap();
        assert!(r.has_next());
        assert_eq!(r.next_name().unwrap(), "a");
        assert_eq!(r.next_long().unwrap(), 1);
        assert_eq!(r.next_name().unwrap(), "b");
        assert_eq!(r.next_string().unwrap(), "two");
        assert_eq!(r.next_name().unwrap(), "c");
        assert!(r.next_boolean().unwrap());
        assert!(!r.has_next());
        r.end_object().unwrap();
        assert!(!r.has_next());
    }

    #[test]
    fn test_empty_object() {
        let mut r = reader("{}");
        r.begin_object().unwrap();
        assert!(!r.has_next());
        r.end_object().unwrap();
    }

    #[test]
    fn test_root_must_be_object() {
        let err = reader("[1]").begin_object().unwrap_err();
        assert_eq!(err.to_string(), "Not a JSON Object: [1]");
    }

    #[test]
    fn test_numbers_must_be_exact() {
        let mut r = reader(r#"{"a": 1.5, "b": "7", "c": 3.0, "d": 4294967296}"#);
        r.begin_object().unwrap();
        r.next_name().unwrap();
        assert_eq!(r.next_long().unwrap_err().to_string(), "For input string: \"1.5\"");
        r.next_name().unwrap();
        assert_eq!(r.next_int().unwrap(), 7);
        r.next_name().unwrap();
        assert_eq!(r.next_long().unwrap(), 3);
        r.next_name().unwrap();
        assert_eq!(
            r.next_int().unwrap_err().to_string(),
            "For input string: \"4294967296\""
        );
    }

    #[test]
    fn test_wrong_token_kind() {
        let mut r = reader(r#"{"a": "yes", "b": [1], "c": null}"#);
        r.begin_object().unwrap();
        r.next_name().unwrap();
        assert_eq!(
            r.next_boolean().unwrap_err(),
            BindError::unexpected("a boolean", "JSON Primitive")
        );
        r.next_name().unwrap();
        assert_eq!(
            r.next_long().unwrap_err(),
            BindError::unexpected("a long", "JSON Array")
        );
        r.next_name().unwrap();
        assert_eq!(
            r.next_string().unwrap_err(),
            BindError::unexpected("a string", "JSON Null")
        );
    }

    #[test]
    fn test_protocol_misuse() {
        let mut r = reader(r#"{"a": 1}"#);
        assert!(r.next_name().is_err());
        r.begin_object().unwrap();
        assert_eq!(
            r.next_long().unwrap_err(),
            BindError::unexpected("a long", "a name")
        );
        assert_eq!(
            r.end_object().unwrap_err(),
            BindError::unexpected("end of object", "a name")
        );
        r.next_name().unwrap();
        assert_eq!(
            r.next_name().unwrap_err(),
            BindError::unexpected("a name", "a value")
        );
        assert!(r.has_next());
        r.next_long().unwrap();
        r.end_object().unwrap();
        assert!(r.begin_object().is_err());
    }
}
