//! Width-selecting number output for streaming writers.
//!
//! Integral fields are written either narrowed to 16 bits or widened to 64
//! bits. The streaming writer itself lives elsewhere; it plugs in through
//! [`JsonSink`].

use std::convert::Infallible;

use crate::collections::Array;
use crate::core::value::Value;
use crate::scalar::Number;

/// Token consumer for [`write_number`]
pub trait JsonSink {
    type Error;

    /// Emit a `null` token
    fn null_value(&mut self) -> Result<(), Self::Error>;

    /// Emit an integral number token
    fn long_value(&mut self, value: i64) -> Result<(), Self::Error>;
}

/// Write `value` as `null` when absent, otherwise as its integral reading:
/// truncated to `i16` when `as_short` is set, `i64` otherwise.
///
/// ```
/// use tessera_value::{Array, Number, write_number};
///
/// let mut out = Array::new();
/// write_number(&mut out, Some(&Number::from(65_537)), true).unwrap();
/// write_number(&mut out, Some(&Number::from(65_537)), false).unwrap();
/// write_number(&mut out, None, true).unwrap();
/// assert_eq!(out.to_string(), "[1,65537,null]");
/// ```
pub fn write_number<S>(out: &mut S, value: Option<&Number>, as_short: bool) -> Result<(), S::Error>
where
    S: JsonSink + ?Sized,
{
    match value {
        None => out.null_value(),
        Some(n) if as_short => out.long_value(i64::from(n.to_i16())),
        Some(n) => out.long_value(n.to_i64()),
    }
}

/// Collects tokens as array elements
impl JsonSink for Array {
    type Error = Infallible;

    fn null_value(&mut self) -> Result<(), Self::Error> {
        self.push(Value::Null);
        Ok(())
    }

    fn long_value(&mut self, value: i64) -> Result<(), Self::Error> {
        self.push(value);
        Ok(())
    }
}
