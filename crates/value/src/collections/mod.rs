//! Container values: [`Array`] and [`Object`]
pub mod array;
pub mod object;

pub use array::Array;
pub use object::Object;
