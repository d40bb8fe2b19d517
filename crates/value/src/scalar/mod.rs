//! Scalar payloads carried by primitive values
pub mod number;
pub mod text;

pub use number::{IntoNumber, Number};
pub use text::IntoText;
