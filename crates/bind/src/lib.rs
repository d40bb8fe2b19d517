//! # tessera-bind
//!
//! Binding JSON objects into plain records by member name.
//!
//! Two paths produce the same record:
//!
//! - derived: `serde` straight from text ([`BagOfPrimitives::from_json`])
//! - table-driven: a [`TokenReader`] walks the object and a [`Schema`]
//!   dispatches each member name to a typed [`Setter`] ([`read_bag`])
//!
//! ```
//! use tessera_bind::{BagOfPrimitives, ValueReader, read_bag};
//!
//! let json = r#"{"longValue":10,"intValue":1,"booleanValue":false,"stringValue":"foo"}"#;
//! let mut reader = ValueReader::from_json(json).unwrap();
//! let bag = read_bag(&mut reader).unwrap();
//! assert_eq!(bag, BagOfPrimitives::from_json(json).unwrap());
//! ```

pub mod bag;
pub mod error;
pub mod reader;
pub mod schema;

pub use bag::{BagOfPrimitives, bag_schema, read_bag, set_field_by_name};
pub use error::{BindError, BindResult};
pub use reader::{TokenReader, ValueReader};
pub use schema::{Schema, Setter};
