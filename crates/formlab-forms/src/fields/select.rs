//! Select field types.

use crate::form::{FieldKind, FormFieldDef};

/// Creates a required choice field (select/dropdown).
pub fn choice_field(name: &str, label: &str, choices: &[(&str, &str)]) -> FormFieldDef {
    let choices = choices
        .iter()
        .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
        .collect();
    FormFieldDef::new(name, label, FieldKind::Choice(choices)).required()
}

/// Creates a required field that only accepts `value`.
pub fn literal_field(name: &str, label: &str, value: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Literal(value.to_string())).required()
}
