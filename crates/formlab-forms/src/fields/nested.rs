//! Nested object and list fields.

use crate::form::{FieldKind, FormFieldDef};
use crate::schema::ObjectSchema;

/// Creates a required nested object field.
pub fn object_field(name: &str, label: &str, schema: ObjectSchema) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Object(schema)).required()
}

/// Creates a required list field whose items follow `item_schema`.
pub fn array_field(name: &str, label: &str, item_schema: ObjectSchema) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Array(item_schema)).required()
}
