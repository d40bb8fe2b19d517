//! # tessera-value
//!
//! In-memory JSON value model.
//!
//! [`Value`] is a closed sum over null, boolean, number, string, array and
//! object. Arrays keep insertion order and permit duplicates; objects keep
//! insertion order for rendering but compare order-independently. Every
//! value renders to compact JSON through `Display`.
//!
//! ```
//! use tessera_value::prelude::*;
//!
//! let mut array = Array::new();
//! array.add_number(1);
//! array.add_string("two");
//! array.add_boolean(None);
//! assert_eq!(array.to_string(), r#"[1,"two",null]"#);
//!
//! let single: Array = vec![Value::from("42")].into();
//! assert_eq!(single.to_i32().unwrap(), 42);
//! ```

pub mod collections;
pub mod core;
pub mod error;
pub mod naming;
pub mod scalar;
pub mod writer;

pub use collections::{Array, Object};
pub use self::core::display::write_json_string;
pub use self::core::{Value, ValueKind};
pub use error::{ErrorCategory, ValueError, ValueResult};
pub use naming::{FieldDescriptor, FieldNaming};
pub use scalar::{IntoNumber, IntoText, Number};
pub use writer::{JsonSink, write_number};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Array, IntoNumber, IntoText, Number, Object, Value, ValueError, ValueKind, ValueResult,
    };
}
