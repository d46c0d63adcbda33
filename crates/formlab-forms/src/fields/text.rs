//! Text field types.

use crate::form::{FieldKind, FormFieldDef};
use crate::validation::{EmailValidator, IsoDateValidator, MinLengthValidator};

/// Creates an optional free-text field.
pub fn text_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Text)
}

/// Creates a required character field with a minimum length.
///
/// `message` is reported both when the field is absent and when it is
/// shorter than `min_length`.
pub fn char_field(name: &str, label: &str, min_length: usize, message: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Text)
        .required_with(message)
        .validator(MinLengthValidator::with_message(min_length, message))
}

/// Creates a required email field.
pub fn email_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Text)
        .required()
        .validator(EmailValidator::new())
}

/// Creates a required, non-empty password field.
pub fn password_field(name: &str, label: &str, message: &str) -> FormFieldDef {
    char_field(name, label, 1, message)
}

/// Creates an optional `YYYY-MM-DD` date field that also accepts `""`.
pub fn date_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, FieldKind::Text)
        .allow_empty()
        .validator(IsoDateValidator::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_field() {
        let field = char_field("displayName", "Display Name", 1, "Display Name is required");
        assert_eq!(field.name, "displayName");
        assert!(field.required);
        assert_eq!(field.validators.len(), 1);
        assert_eq!(
            field.required_message.as_deref(),
            Some("Display Name is required")
        );
    }

    #[test]
    fn test_email_field() {
        let field = email_field("email", "Email");
        assert_eq!(field.name, "email");
        assert!(field.required);
        assert!(field.validators[0].validate("test@test.com").is_ok());
    }

    #[test]
    fn test_date_field() {
        let field = date_field("favoriteSince", "Favorite Since");
        assert!(!field.required);
        assert!(field.allow_empty);
    }
}
