//! Object schemas: validation and form-data coercion of JSON payloads.

use serde_json::{Map, Value};

use crate::error::{ErrorKind, ValidationErrors};
use crate::form::{literal_message, FieldKind, FormFieldDef};
use crate::path::FieldPath;

/// A schema that validates payloads and normalizes them.
pub trait Schema: Send + Sync {
    /// Validates `value` found at `path`, reporting into `errors`.
    ///
    /// Returns the normalized value: declared keys only, defaults filled in.
    /// The returned value is only meaningful when no errors were reported.
    fn validate(&self, value: &Value, path: &FieldPath, errors: &mut ValidationErrors) -> Value;

    /// Converts decoded form-data strings into the types the schema expects.
    fn coerce(&self, value: Value) -> Value;
}

/// Schema for a JSON object with declared fields.
///
/// Undeclared keys are dropped from the normalized value, or reported as a
/// [`ErrorKind::SchemaMismatch`] when the schema is strict.
#[derive(Debug)]
pub struct ObjectSchema {
    fields: Vec<FormFieldDef>,
    strict: bool,
}

impl ObjectSchema {
    /// Creates a schema from field definitions.
    pub fn new(fields: Vec<FormFieldDef>, strict: bool) -> Self {
        Self { fields, strict }
    }

    /// Returns the field definitions.
    pub fn fields(&self) -> &[FormFieldDef] {
        &self.fields
    }

    /// Returns the field named `name`.
    pub fn field(&self, name: &str) -> Option<&FormFieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns whether undeclared keys are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Schema for ObjectSchema {
    fn validate(&self, value: &Value, path: &FieldPath, errors: &mut ValidationErrors) -> Value {
        let Some(map) = value.as_object() else {
            errors.add(
                path.clone(),
                ErrorKind::FieldFormatInvalid,
                format!("Expected object, received {}", type_name(value)),
            );
            return Value::Null;
        };

        let mut normalized = Map::new();
        for field in &self.fields {
            let field_path = path.key(&field.name);
            match map.get(&field.name) {
                Some(value) => {
                    let value = validate_field(field, value, &field_path, errors);
                    normalized.insert(field.name.clone(), value);
                }
                None => {
                    if let Some(default) = &field.default {
                        normalized.insert(field.name.clone(), default.clone());
                    } else if field.required {
                        errors.add(field_path, field.missing_kind(), field.missing_message());
                    }
                }
            }
        }

        if self.strict {
            let unknown: Vec<String> = map
                .keys()
                .filter(|key| self.field(key).is_none())
                .map(|key| format!("'{key}'"))
                .collect();
            if !unknown.is_empty() {
                errors.add(
                    path.clone(),
                    ErrorKind::SchemaMismatch,
                    format!("Unrecognized key(s) in object: {}", unknown.join(", ")),
                );
            }
        }

        Value::Object(normalized)
    }

    fn coerce(&self, value: Value) -> Value {
        let Value::Object(mut map) = value else {
            return value;
        };

        for field in &self.fields {
            let coerced = match (&field.kind, map.remove(&field.name)) {
                (FieldKind::Boolean, Some(Value::String(s))) => match s.as_str() {
                    "on" | "true" => Value::Bool(true),
                    "" | "off" | "false" => Value::Bool(false),
                    _ => Value::String(s),
                },
                // Unchecked checkboxes are not submitted at all.
                (FieldKind::Boolean, None) if field.required => Value::Bool(false),
                (FieldKind::Object(schema), Some(value)) => schema.coerce(value),
                (FieldKind::Array(schema), Some(Value::Array(items))) => {
                    Value::Array(items.into_iter().map(|item| schema.coerce(item)).collect())
                }
                (_, Some(value)) => value,
                (_, None) => continue,
            };
            map.insert(field.name.clone(), coerced);
        }

        Value::Object(map)
    }
}

fn validate_field(
    field: &FormFieldDef,
    value: &Value,
    path: &FieldPath,
    errors: &mut ValidationErrors,
) -> Value {
    match &field.kind {
        FieldKind::Text => {
            let Some(s) = value.as_str() else {
                errors.add(path.clone(), ErrorKind::FieldFormatInvalid, expected("string", value));
                return value.clone();
            };
            if !(field.allow_empty && s.is_empty()) {
                for validator in &field.validators {
                    if let Err(message) = validator.validate(s) {
                        errors.add(path.clone(), validator.kind(), message);
                        break;
                    }
                }
            }
        }
        FieldKind::Boolean => match value.as_bool() {
            Some(false) => {
                if let Some(message) = &field.must_be_true {
                    errors.add(path.clone(), ErrorKind::FieldRequired, message.clone());
                }
            }
            Some(true) => {}
            None => {
                errors.add(path.clone(), ErrorKind::FieldFormatInvalid, expected("boolean", value));
            }
        },
        FieldKind::Choice(choices) => {
            let known = value
                .as_str()
                .is_some_and(|s| choices.iter().any(|(v, _)| v == s));
            if !known {
                let options: Vec<String> = choices.iter().map(|(v, _)| format!("'{v}'")).collect();
                let received = match value {
                    Value::String(s) => format!("'{s}'"),
                    other => type_name(other).to_string(),
                };
                errors.add(
                    path.clone(),
                    ErrorKind::FieldFormatInvalid,
                    format!(
                        "Invalid enum value. Expected {}, received {received}",
                        options.join(" | ")
                    ),
                );
            }
        }
        FieldKind::Literal(literal) => {
            if value.as_str() != Some(literal.as_str()) {
                errors.add(path.clone(), ErrorKind::SchemaMismatch, literal_message(literal));
            }
        }
        FieldKind::Object(schema) => return schema.validate(value, path, errors),
        FieldKind::Array(schema) => {
            let Some(items) = value.as_array() else {
                errors.add(path.clone(), ErrorKind::FieldFormatInvalid, expected("array", value));
                return value.clone();
            };
            let items = items
                .iter()
                .enumerate()
                .map(|(i, item)| schema.validate(item, &path.index(i), errors))
                .collect();
            return Value::Array(items);
        }
    }
    value.clone()
}

fn expected(type_name_expected: &str, value: &Value) -> String {
    format!(
        "Expected {type_name_expected}, received {}",
        type_name(value)
    )
}

/// Returns the JSON type name of a value, as used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
