//! Field definitions, the form builder and the `Form` trait.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorKind, FormError, Result, ValidationErrors};
use crate::form_data::decode_form_data;
use crate::path::FieldPath;
use crate::schema::{ObjectSchema, Schema};
use crate::validation::Validator;

/// Shape of the value a field accepts.
#[derive(Debug)]
pub enum FieldKind {
    /// A string.
    Text,
    /// A boolean.
    Boolean,
    /// One of a fixed set of strings, as `(value, label)` pairs.
    Choice(Vec<(String, String)>),
    /// Exactly this string.
    Literal(String),
    /// A nested object.
    Object(ObjectSchema),
    /// A list of objects.
    Array(ObjectSchema),
}

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name (the object key).
    pub name: String,
    /// Field label.
    pub label: String,
    /// Accepted value shape.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub required: bool,
    /// Message reported when a required field is absent.
    pub required_message: Option<String>,
    /// Help text.
    pub help_text: Option<String>,
    /// Value substituted when the field is absent.
    pub default: Option<Value>,
    /// Validators, run in order until the first failure.
    pub validators: Vec<Box<dyn Validator>>,
    /// Whether an empty string bypasses the validators.
    pub allow_empty: bool,
    /// Message reported when a boolean field is not `true`.
    pub must_be_true: Option<String>,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("default", &self.default)
            .field("allow_empty", &self.allow_empty)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            required_message: None,
            help_text: None,
            default: None,
            validators: Vec::new(),
            allow_empty: false,
            must_be_true: None,
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Makes the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self.required_message = None;
        self
    }

    /// Makes the field required with a custom message for when it is absent.
    #[must_use]
    pub fn required_with(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets the value used when the field is absent.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Lets an empty string through without running validators.
    #[must_use]
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Requires a boolean field to be `true`.
    #[must_use]
    pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
        self.must_be_true = Some(message.into());
        self
    }

    /// Kind reported when a required field is absent.
    pub(crate) fn missing_kind(&self) -> ErrorKind {
        match self.kind {
            FieldKind::Literal(_) => ErrorKind::SchemaMismatch,
            _ => ErrorKind::FieldRequired,
        }
    }

    /// Message reported when a required field is absent.
    pub(crate) fn missing_message(&self) -> String {
        match (&self.required_message, &self.kind) {
            (Some(message), _) => message.clone(),
            (None, FieldKind::Literal(expected)) => literal_message(expected),
            (None, _) => "Required".to_string(),
        }
    }
}

pub(crate) fn literal_message(expected: &str) -> String {
    format!("Invalid literal value, expected \"{expected}\"")
}

/// A simple form builder for creating object schemas programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
    strict: bool,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Rejects keys that are not declared fields.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Returns the object schema.
    pub fn build(self) -> ObjectSchema {
        ObjectSchema::new(self.fields, self.strict)
    }
}

/// Trait for typed forms backed by a schema.
///
/// `parse` is the single entry point for untrusted payloads: the schema runs
/// first and the typed value is only built from a payload that passed it.
pub trait Form: Sized + Serialize + DeserializeOwned {
    /// Schema type describing the payload.
    type Schema: Schema + 'static;

    /// Returns the schema for this form.
    fn schema() -> &'static Self::Schema;

    /// Validates a candidate payload and returns the normalized typed value.
    fn parse(value: &Value) -> std::result::Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let normalized = Self::schema().validate(value, &FieldPath::root(), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        serde_json::from_value(normalized).map_err(|e| {
            ValidationErrors::single(FieldPath::root(), ErrorKind::SchemaMismatch, e.to_string())
        })
    }

    /// Decodes an urlencoded body, coerces it against the schema and parses it.
    fn parse_form_data(body: &str) -> Result<Self> {
        let value = Self::schema().coerce(decode_form_data(body)?);
        Self::parse(&value).map_err(FormError::Validation)
    }

    /// Re-validates an already typed value.
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let value = serde_json::to_value(self).map_err(|e| {
            ValidationErrors::single(FieldPath::root(), ErrorKind::SchemaMismatch, e.to_string())
        })?;
        Self::parse(&value).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{char_field, email_field};

    #[test]
    fn test_field_def_builder() {
        let field = FormFieldDef::new("username", "Username", FieldKind::Text)
            .required_with("Username is required")
            .help_text("Choose a unique username");

        assert_eq!(field.name, "username");
        assert_eq!(field.label, "Username");
        assert!(field.required);
        assert_eq!(field.missing_message(), "Username is required");
        assert_eq!(field.missing_kind(), ErrorKind::FieldRequired);
        assert_eq!(
            field.help_text,
            Some("Choose a unique username".to_string())
        );
    }

    #[test]
    fn test_literal_missing_is_schema_mismatch() {
        let field = FormFieldDef::new("method", "Method", FieldKind::Literal("password".into()))
            .required();
        assert_eq!(field.missing_kind(), ErrorKind::SchemaMismatch);
        assert_eq!(
            field.missing_message(),
            "Invalid literal value, expected \"password\""
        );
    }

    #[test]
    fn test_form_builder() {
        let schema = FormBuilder::new()
            .field(char_field("name", "Name", 1, "Name is required"))
            .field(email_field("email", "Email"))
            .strict()
            .build();

        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.fields()[0].name, "name");
        assert_eq!(schema.fields()[1].name, "email");
        assert!(schema.is_strict());
    }
}
