//! The four-field record used to compare the derived and table-driven
//! binding paths.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::BindResult;
use crate::reader::TokenReader;
use crate::schema::{Schema, Setter};

/// One field of each primitive kind. Absent members keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BagOfPrimitives {
    pub long_value: i64,
    pub int_value: i32,
    pub boolean_value: bool,
    pub string_value: String,
}

impl BagOfPrimitives {
    pub fn new(
        long_value: i64,
        int_value: i32,
        boolean_value: bool,
        string_value: impl Into<String>,
    ) -> Self {
        Self {
            long_value,
            int_value,
            boolean_value,
            string_value: string_value.into(),
        }
    }

    /// Derived path: `serde_json` straight into the struct
    pub fn from_json(json: &str) -> BindResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> BindResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Field table keyed by the serialized member names
pub fn bag_schema() -> Schema<BagOfPrimitives> {
    Schema::new("BagOfPrimitives")
        .field("longValue", Setter::Long(|bag: &mut BagOfPrimitives, v| bag.long_value = v))
        .field("intValue", Setter::Int(|bag: &mut BagOfPrimitives, v| bag.int_value = v))
        .field("booleanValue", Setter::Boolean(|bag: &mut BagOfPrimitives, v| bag.boolean_value = v))
        .field("stringValue", Setter::Text(|bag: &mut BagOfPrimitives, v| bag.string_value = v))
}

static BAG_SCHEMA: LazyLock<Schema<BagOfPrimitives>> = LazyLock::new(bag_schema);

/// Bind the pending value of `reader` to the bag field called `name`
pub fn set_field_by_name<R>(bag: &mut BagOfPrimitives, name: &str, reader: &mut R) -> BindResult<()>
where
    R: TokenReader + ?Sized,
{
    BAG_SCHEMA.set_field_by_name(bag, name, reader)
}

/// Table-driven path: walk one object and dispatch each member by name
pub fn read_bag<R>(reader: &mut R) -> BindResult<BagOfPrimitives>
where
    R: TokenReader + ?Sized,
{
    BAG_SCHEMA.read(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ValueReader;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialized_names() {
        let json = BagOfPrimitives::new(10, 1, false, "foo").to_json().unwrap();
        assert_eq!(
            json,
            r#"{"longValue":10,"intValue":1,"booleanValue":false,"stringValue":"foo"}"#
        );
    }

    #[test]
    fn test_schema_names_match_serde() {
        let names: Vec<_> = bag_schema().names().map(str::to_owned).collect();
        assert_eq!(names, ["longValue", "intValue", "booleanValue", "stringValue"]);
    }

    #[test]
    fn test_set_field_by_name() {
        let mut bag = BagOfPrimitives::default();
        let mut reader = ValueReader::from_json(r#"{"stringValue": "bar"}"#).unwrap();
        reader.begin_object().unwrap();
        let name = reader.next_name().unwrap();
        set_field_by_name(&mut bag, &name, &mut reader).unwrap();
        reader.end_object().unwrap();
        assert_eq!(bag.string_value, "bar");
    }
}
