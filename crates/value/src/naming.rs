//! Field naming strategies.
//!
//! A naming strategy is any `Fn(&FieldDescriptor) -> String`. Strategies
//! compose as ordinary closures: [`upper_case`] wraps a delegate and folds its
//! output to uppercase.

/// Compile-time description of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Type that declares the field
    pub declaring_type: &'static str,
    /// Field name as declared in source
    pub name: &'static str,
}

impl FieldDescriptor {
    pub const fn new(declaring_type: &'static str, name: &'static str) -> Self {
        Self {
            declaring_type,
            name,
        }
    }
}

/// Maps a field to its serialized member name
pub trait FieldNaming: Fn(&FieldDescriptor) -> String {}

impl<F> FieldNaming for F where F: Fn(&FieldDescriptor) -> String {}

/// The declared field name, unchanged
pub fn identity(field: &FieldDescriptor) -> String {
    field.name.to_owned()
}

/// Wrap `delegate` so its result is uppercased (Unicode, locale-independent).
///
/// ```
/// use tessera_value::naming::{FieldDescriptor, identity, upper_case};
///
/// let naming = upper_case(identity);
/// let field = FieldDescriptor::new("BagOfPrimitives", "longValue");
/// assert_eq!(naming(&field), "LONGVALUE");
/// ```
pub fn upper_case<F: FieldNaming>(delegate: F) -> impl FieldNaming {
    move |field: &FieldDescriptor| delegate(field).to_uppercase()
}
