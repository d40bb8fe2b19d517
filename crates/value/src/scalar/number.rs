//! JSON number with the stored width preserved.
//!
//! A `Number` remembers whether it was built from an integer, an `f32`, an
//! `f64`, or a textual literal too wide for 64 bits. Rendering and equality
//! depend on that: `Number::from(1.0)` renders `1.0` while `Number::from(1)`
//! renders `1`, yet the two compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{ValueError, ValueResult};

/// A JSON number
#[derive(Clone)]
pub struct Number {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Validated numeric literal kept verbatim (arbitrary precision)
    Text(Box<str>),
}

impl Number {
    /// Parse a numeric literal, keeping its text as written.
    ///
    /// Accepts anything that reads as a finite decimal number, including
    /// integers wider than 64 bits. `NaN` and `Infinity` are rejected.
    ///
    /// ```
    /// use tessera_value::Number;
    ///
    /// let n = Number::parse("123456789012345678901234567890").unwrap();
    /// assert_eq!(n.to_string(), "123456789012345678901234567890");
    /// assert!(Number::parse("hello").is_err());
    /// ```
    pub fn parse(text: &str) -> ValueResult<Self> {
        let literal = text.trim();
        let valid = literal.parse::<i128>().is_ok()
            || literal.parse::<f64>().is_ok_and(f64::is_finite);
        if literal.is_empty() || !valid {
            return Err(ValueError::number_format(text));
        }
        Ok(Self {
            repr: Repr::Text(literal.into()),
        })
    }

    /// Whether the stored representation is an integer type.
    /// Floats are never integral, even when their value is whole.
    pub fn is_integral(&self) -> bool {
        match &self.repr {
            Repr::I64(_) | Repr::U64(_) => true,
            Repr::F32(_) | Repr::F64(_) => false,
            Repr::Text(t) => t.parse::<i128>().is_ok(),
        }
    }

    /// Whether the stored representation is a float type
    pub fn is_float(&self) -> bool {
        matches!(self.repr, Repr::F32(_) | Repr::F64(_))
    }

    /// Read as `f64`
    pub fn to_f64(&self) -> f64 {
        match &self.repr {
            Repr::I64(v) => *v as f64,
            Repr::U64(v) => *v as f64,
            Repr::F32(v) => f64::from(*v),
            Repr::F64(v) => *v,
            Repr::Text(t) => text_f64(t),
        }
    }

    /// Read as `f32`
    pub fn to_f32(&self) -> f32 {
        match &self.repr {
            Repr::F32(v) => *v,
            _ => self.to_f64() as f32,
        }
    }

    /// Read as `i64`; wider integers keep their low 64 bits, floats saturate
    pub fn to_i64(&self) -> i64 {
        match &self.repr {
            Repr::I64(v) => *v,
            Repr::U64(v) => *v as i64,
            Repr::F32(v) => *v as i64,
            Repr::F64(v) => *v as i64,
            Repr::Text(t) => t
                .parse::<i64>()
                .ok()
                .or_else(|| t.parse::<i128>().ok().map(|v| v as i64))
                .unwrap_or_else(|| text_f64(t) as i64),
        }
    }

    /// Read as `i32`; integers truncate, floats saturate
    pub fn to_i32(&self) -> i32 {
        match &self.repr {
            Repr::F32(v) => *v as i32,
            Repr::F64(v) => *v as i32,
            _ => self.to_i64() as i32,
        }
    }

    /// Read as `i16`, the two's-complement truncation of the integral reading
    pub fn to_i16(&self) -> i16 {
        match &self.repr {
            Repr::I64(_) | Repr::U64(_) => self.to_i64() as i16,
            _ => self.to_i32() as i16,
        }
    }

    /// Read as `i8`, the two's-complement truncation of the integral reading
    pub fn to_i8(&self) -> i8 {
        match &self.repr {
            Repr::I64(_) | Repr::U64(_) => self.to_i64() as i8,
            _ => self.to_i32() as i8,
        }
    }

    /// The exact integer this number denotes, if it denotes one.
    fn exact_integer(&self) -> Option<i128> {
        match &self.repr {
            Repr::I64(v) => Some(i128::from(*v)),
            Repr::U64(v) => Some(i128::from(*v)),
            Repr::F32(v) => float_exact(f64::from(*v)),
            Repr::F64(v) => float_exact(*v),
            Repr::Text(t) => t.parse::<i128>().ok().or_else(|| float_exact(text_f64(t))),
        }
    }
}

// Text is validated on construction, the fallback is unreachable.
fn text_f64(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

fn float_exact(v: f64) -> Option<i128> {
    const LIMIT: f64 = 1.7e38;
    (v.is_finite() && v.fract() == 0.0 && v.abs() < LIMIT).then_some(v as i128)
}

fn fmt_float(f: &mut fmt::Formatter<'_>, v: f64, debug: impl fmt::Debug) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        // Debug is the shortest round-trip form and keeps `.0` on whole values
        write!(f, "{debug:?}")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::I64(v) => write!(f, "{v}"),
            Repr::U64(v) => write!(f, "{v}"),
            Repr::F32(v) => fmt_float(f, f64::from(*v), v),
            Repr::F64(v) => fmt_float(f, *v, v),
            Repr::Text(t) => f.write_str(t),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.exact_integer(), other.exact_integer()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => {
                let (a, b) = (self.to_f64(), other.to_f64());
                a == b || (a.is_nan() && b.is_nan())
            }
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Same split as `eq`: whole values hash by integer, the rest by bits.
        match self.exact_integer() {
            Some(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            None => {
                1u8.hash(state);
                let v = self.to_f64();
                let bits = if v.is_nan() { f64::NAN.to_bits() } else { v.to_bits() };
                bits.hash(state);
            }
        }
    }
}

impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.repr {
            Repr::I64(v) => serializer.serialize_i64(*v),
            Repr::U64(v) => serializer.serialize_u64(*v),
            Repr::F32(v) => serializer.serialize_f32(*v),
            Repr::F64(v) => serializer.serialize_f64(*v),
            Repr::Text(t) => {
                if let Ok(v) = t.parse::<i64>() {
                    serializer.serialize_i64(v)
                } else if let Ok(v) = t.parse::<u64>() {
                    serializer.serialize_u64(v)
                } else {
                    serializer.serialize_f64(text_f64(t))
                }
            }
        }
    }
}

// ==================== From implementations ====================

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Self { repr: Repr::I64(v as i64) }
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(v: $t) -> Self {
                let v = v as u64;
                match i64::try_from(v) {
                    Ok(v) => Self { repr: Repr::I64(v) },
                    Err(_) => Self { repr: Repr::U64(v) },
                }
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<i128> for Number {
    fn from(v: i128) -> Self {
        if let Ok(v) = i64::try_from(v) {
            Self::from(v)
        } else if let Ok(v) = u64::try_from(v) {
            Self::from(v)
        } else {
            Self {
                repr: Repr::Text(v.to_string().into()),
            }
        }
    }
}

impl From<u128> for Number {
    fn from(v: u128) -> Self {
        match u64::try_from(v) {
            Ok(v) => Self::from(v),
            Err(_) => Self {
                repr: Repr::Text(v.to_string().into()),
            },
        }
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self { repr: Repr::F32(v) }
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self { repr: Repr::F64(v) }
    }
}

impl std::str::FromStr for Number {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Conversion accepted by the nullable `add_number` / `insert_number` helpers.
///
/// Implemented for every primitive number type, [`Number`], and `Option` of
/// each, so `array.add_number(None::<f64>)` appends a null.
pub trait IntoNumber {
    /// `None` means "no value" and becomes a JSON null
    fn into_number(self) -> Option<Number>;
}

macro_rules! into_number {
    ($($t:ty),*) => {$(
        impl IntoNumber for $t {
            fn into_number(self) -> Option<Number> {
                Some(Number::from(self))
            }
        }

        impl IntoNumber for Option<$t> {
            fn into_number(self) -> Option<Number> {
                self.map(Number::from)
            }
        }
    )*};
}

into_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Number
);

impl IntoNumber for &Number {
    fn into_number(self) -> Option<Number> {
        Some(self.clone())
    }
}
