//! Field tables for binding records by member name.
//!
//! A [`Schema`] is built once per record type. Each entry pairs the
//! serialized member name with a [`Setter`] whose tag selects the reader
//! call, so the value type is fixed when the table is registered.

use std::fmt;

use indexmap::IndexMap;
use tessera_value::naming::{FieldDescriptor, FieldNaming};

use crate::error::{BindError, BindResult};
use crate::reader::TokenReader;

/// Typed setter for one field of `T`
pub enum Setter<T> {
    Long(fn(&mut T, i64)),
    Int(fn(&mut T, i32)),
    Boolean(fn(&mut T, bool)),
    Text(fn(&mut T, String)),
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setter<T> {}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Long(_) => "Setter::Long",
            Self::Int(_) => "Setter::Int",
            Self::Boolean(_) => "Setter::Boolean",
            Self::Text(_) => "Setter::Text",
        })
    }
}

#[derive(Debug)]
struct Field<T> {
    descriptor: FieldDescriptor,
    setter: Setter<T>,
}

/// Member name to setter table for `T`
#[derive(Debug)]
pub struct Schema<T> {
    type_name: &'static str,
    fields: IndexMap<String, Field<T>>,
}

impl<T> Schema<T> {
    /// Empty schema for the named record type
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: IndexMap::new(),
        }
    }

    /// Register `name` (serialized as declared). A repeated name replaces
    /// the earlier setter.
    #[must_use]
    pub fn field(mut self, name: &'static str, setter: Setter<T>) -> Self {
        let descriptor = FieldDescriptor::new(self.type_name, name);
        self.fields
            .insert(name.to_owned(), Field { descriptor, setter });
        self
    }

    /// Re-key every field by `naming` applied to its declared descriptor
    #[must_use]
    pub fn with_naming(self, naming: impl FieldNaming) -> Self {
        let fields = self
            .fields
            .into_values()
            .map(|field| (naming(&field.descriptor), field))
            .collect();
        Self {
            type_name: self.type_name,
            fields,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialized member names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn setter(&self, name: &str) -> Option<Setter<T>> {
        self.fields.get(name).map(|field| field.setter)
    }

    /// Read the pending value from `reader` and store it in the field called
    /// `name`. The setter's tag picks the reader call.
    pub fn set_field_by_name<R>(&self, target: &mut T, name: &str, reader: &mut R) -> BindResult<()>
    where
        R: TokenReader + ?Sized,
    {
        let Some(field) = self.fields.get(name) else {
            tracing::debug!(record = self.type_name, field = name, "rejected unknown field");
            return Err(BindError::unknown_field(self.type_name, name));
        };
        match field.setter {
            Setter::Long(set) => set(target, reader.next_long()?),
            Setter::Int(set) => set(target, reader.next_int()?),
            Setter::Boolean(set) => set(target, reader.next_boolean()?),
            Setter::Text(set) => set(target, reader.next_string()?),
        }
        tracing::trace!(record = self.type_name, field = name, "bound field");
        Ok(())
    }

    /// Bind one whole object from `reader` into a fresh `T`
    pub fn read<R>(&self, reader: &mut R) -> BindResult<T>
    where
        T: Default,
        R: TokenReader + ?Sized,
    {
        reader.begin_object()?;
        let mut target = T::default();
        while reader.has_next() {
            let name = reader.next_name()?;
            self.set_field_by_name(&mut target, &name, reader)?;
        }
        reader.end_object()?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ValueReader;
    use tessera_value::naming::upper_case;

    #[derive(Debug, Default, PartialEq)]
    struct Point {
        x: i32,
        label: String,
    }

    fn point_schema() -> Schema<Point> {
        Schema::new("Point")
            .field("x", Setter::Int(|p: &mut Point, v| p.x = v))
            .field("label", Setter::Text(|p: &mut Point, v| p.label = v))
    }

    #[test]
    fn test_read_binds_every_member() {
        let mut reader = ValueReader::from_json(r#"{"label": "origin", "x": 0}"#).unwrap();
        let point = point_schema().read(&mut reader).unwrap();
        assert_eq!(
            point,
            Point {
                x: 0,
                label: "origin".into()
            }
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut reader = ValueReader::from_json(r#"{"x": 1, "y": 2}"#).unwrap();
        let err = point_schema().read(&mut reader).unwrap_err();
        assert_eq!(err, BindError::unknown_field("Point", "y"));
    }

    #[test]
    fn test_with_naming_rekeys() {
        let schema = point_schema().with_naming(upper_case(tessera_value::naming::identity));
        assert_eq!(schema.names().collect::<Vec<_>>(), ["X", "LABEL"]);
        assert!(schema.setter("x").is_none());

        let mut reader = ValueReader::from_json(r#"{"X": 5}"#).unwrap();
        assert_eq!(schema.read(&mut reader).unwrap().x, 5);
    }

    #[test]
    fn test_later_registration_wins() {
        let schema = point_schema().field("x", Setter::Int(|p: &mut Point, v| p.x = -v));
        assert_eq!(schema.len(), 2);
        let mut reader = ValueReader::from_json(r#"{"x": 3}"#).unwrap();
        assert_eq!(schema.read(&mut reader).unwrap().x, -3);
    }
}
