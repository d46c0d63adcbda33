//! Checkbox field types.

use crate::form::{FieldKind, FormFieldDef};

/// Creates a required boolean field (checkbox).
pub fn boolean_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Boolean).required()
}

/// Creates a checkbox that must be ticked.
pub fn consent_field(name: &str, label: &str, message: &str) -> FormFieldDef {
    boolean_field(name, label).must_be_true(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_field() {
        let field = boolean_field("marketingOptIn", "Marketing Opt-In");
        assert_eq!(field.name, "marketingOptIn");
        assert!(field.required);
        assert!(field.must_be_true.is_none());
    }

    #[test]
    fn test_consent_field() {
        let field = consent_field("terms", "Terms", "You must accept the terms");
        assert_eq!(
            field.must_be_true.as_deref(),
            Some("You must accept the terms")
        );
    }
}
