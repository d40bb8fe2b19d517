//! Field naming decorators

use rstest::rstest;
use tessera_value::naming::{FieldDescriptor, FieldNaming, identity, upper_case};

fn constant(_: &FieldDescriptor) -> String {
    "fieldName".to_owned()
}

fn translate(naming: &impl FieldNaming, field: &FieldDescriptor) -> String {
    naming(field)
}

#[rstest]
#[case(FieldDescriptor::new("BagOfPrimitives", "longValue"))]
#[case(FieldDescriptor::new("BagOfPrimitives", "stringValue"))]
#[case(FieldDescriptor::new("", ""))]
fn upper_case_decorates_any_field(#[case] field: FieldDescriptor) {
    assert_eq!(translate(&upper_case(constant), &field), "FIELDNAME");
}

#[rstest]
#[case("longValue", "LONGVALUE")]
#[case("int_value", "INT_VALUE")]
#[case("ñandú", "ÑANDÚ")]
fn upper_case_over_identity(#[case] name: &'static str, #[case] expected: &str) {
    let field = FieldDescriptor::new("Record", name);
    assert_eq!(translate(&upper_case(identity), &field), expected);
}

#[test]
fn capturing_delegate() {
    let prefix = String::from("m_");
    let naming = upper_case(move |field: &FieldDescriptor| format!("{prefix}{}", field.name));
    assert_eq!(naming(&FieldDescriptor::new("Record", "count")), "M_COUNT");
}
