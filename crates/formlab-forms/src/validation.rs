//! Form field validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ErrorKind;

// Local part, `@`, dot-separated domain labels, alphabetic TLD.
// Leading dots and consecutive dots are rejected separately since the
// regex crate has no lookahead.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("ISO_DATE_REGEX: invalid regex pattern")
});

/// Trait for string field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;

    /// Returns the kind of error reported when validation fails.
    fn kind(&self) -> ErrorKind {
        ErrorKind::FieldFormatInvalid
    }
}

/// Validator that enforces a minimum length in characters.
///
/// A minimum of one character is how "required" is expressed for strings,
/// so failures at that bound are reported as [`ErrorKind::FieldRequired`].
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("String must contain at least {min_length} character(s)"),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ErrorKind {
        if self.min_length <= 1 {
            ErrorKind::FieldRequired
        } else {
            ErrorKind::FieldFormatInvalid
        }
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Invalid email".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for `YYYY-MM-DD` date strings.
///
/// Only the shape is checked, not the calendar.
#[derive(Debug, Clone)]
pub struct IsoDateValidator {
    message: String,
}

impl IsoDateValidator {
    /// Creates a new IsoDateValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Invalid date format (YYYY-MM-DD)".to_string(),
        }
    }
}

impl Default for IsoDateValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IsoDateValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if ISO_DATE_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
