//! Core building blocks of the value model.
//!
//! - [`value`]: the [`Value`] enum and its coercions
//! - [`kind`]: [`ValueKind`] classification used in diagnostics
//! - [`display`]: canonical JSON rendering
//! - [`serde`]: serde and `serde_json` bridge
pub mod display;
pub mod kind;
pub mod serde;
pub mod value;

pub use kind::ValueKind;
pub use value::Value;
