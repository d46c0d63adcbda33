//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::path::FieldPath;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failed with errors.
    #[error("validation failed:\n{0}")]
    Validation(ValidationErrors),

    /// A list mutation addressed a position outside the list.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A field path could not be parsed.
    #[error("invalid field path: {0}")]
    InvalidPath(String),

    /// Form data parsing error.
    #[error("failed to parse form data: {0}")]
    ParseError(String),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    /// Returns the error kind reported to callers, if this error has one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::IndexOutOfRange { .. } => Some(ErrorKind::IndexOutOfRange),
            Self::InvalidPath(_) | Self::ParseError(_) | Self::Json(_) => {
                Some(ErrorKind::FieldFormatInvalid)
            }
            Self::Validation(_) => None,
        }
    }
}

/// Classification of a field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A required field is missing or empty.
    FieldRequired,
    /// A field has the wrong type or format (bad email, bad date, ...).
    FieldFormatInvalid,
    /// A discriminator is missing or unknown, a variant block is missing,
    /// or an object carries keys outside its allowed set.
    SchemaMismatch,
    /// A list mutation addressed a position outside the list.
    IndexOutOfRange,
    /// Credentials were rejected.
    AuthenticationFailed,
}

/// A single error addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field.
    pub path: FieldPath,
    /// Error classification.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

/// Ordered collection of validation errors.
///
/// Errors keep the order in which they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates a collection holding one error.
    pub fn single(path: FieldPath, kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(path, kind, message);
        errors
    }

    /// Adds an error for a field.
    pub fn add(&mut self, path: FieldPath, kind: ErrorKind, message: impl Into<String>) {
        self.errors.push(FieldError {
            path,
            kind,
            message: message.into(),
        });
    }

    /// Appends all errors of `other`, keeping their order.
    pub fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the first error reported for a path in its textual form.
    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.path.to_string() == path)
    }

    /// Returns all messages reported for a path.
    pub fn messages(&self, path: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.path.to_string() == path)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Returns an iterator over the errors in report order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns the textual paths of all errors in report order.
    pub fn paths(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.path.to_string()).collect()
    }

    /// Returns the first message per path, keyed by textual path.
    ///
    /// Errors addressed at the root path are left out; see
    /// [`ValidationErrors::form_errors`].
    pub fn field_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for error in self.errors.iter().filter(|e| !e.path.is_root()) {
            map.entry(error.path.to_string())
                .or_insert_with(|| error.message.clone());
        }
        map
    }

    /// Returns the messages of errors addressed at the root path.
    pub fn form_errors(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.path.is_root())
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for error in &self.errors {
            if error.path.is_root() {
                writeln!(f, "{}", error.message)?;
            } else {
                writeln!(f, "{}: {}", error.path, error.message)?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_keep_report_order() {
        let mut errors = ValidationErrors::new();
        errors.add(
            FieldPath::root().key("password"),
            ErrorKind::FieldRequired,
            "Password is required",
        );
        errors.add(
            FieldPath::root().key("email"),
            ErrorKind::FieldFormatInvalid,
            "Invalid email",
        );

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.paths(), vec!["password", "email"]);
        assert_eq!(
            errors.get("email").map(|e| e.kind),
            Some(ErrorKind::FieldFormatInvalid)
        );
    }

    #[test]
    fn test_field_map_keeps_first_message() {
        let mut errors = ValidationErrors::new();
        let path = FieldPath::root().key("favoriteGames").index(1).key("id");
        errors.add(path.clone(), ErrorKind::FieldRequired, "Game ID is required");
        errors.add(path, ErrorKind::FieldFormatInvalid, "second");
        errors.add(FieldPath::root(), ErrorKind::SchemaMismatch, "broken");

        let map = errors.field_map();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("favoriteGames[1].id").map(String::as_str),
            Some("Game ID is required")
        );
        assert_eq!(errors.form_errors(), vec!["broken"]);
    }

    #[test]
    fn test_display() {
        let errors = ValidationErrors::single(
            FieldPath::root().key("email"),
            ErrorKind::FieldFormatInvalid,
            "Invalid email",
        );
        assert_eq!(errors.to_string(), "email: Invalid email\n");
    }
}
