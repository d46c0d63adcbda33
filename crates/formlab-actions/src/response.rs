//! Action responses.

use std::collections::BTreeMap;

use formlab_forms::{FormError, ValidationErrors};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ActionError;

/// Status-coded result of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: T,
}

impl<T> ActionResponse<T> {
    /// Creates a response with the given status.
    pub fn new(status: u16, body: T) -> Self {
        Self { status, body }
    }

    /// Creates a 200 OK response.
    pub fn ok(body: T) -> Self {
        Self::new(200, body)
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request(body: T) -> Self {
        Self::new(400, body)
    }

    /// Creates a 401 Unauthorized response.
    pub fn unauthorized(body: T) -> Self {
        Self::new(401, body)
    }

    /// Returns whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the status text for the current status code.
    pub fn status_text(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            401 => "Unauthorized",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }
}

impl<T: Serialize> ActionResponse<T> {
    /// Returns the body as a JSON value.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.body)
    }
}

/// Body of a submission that was turned away before reaching its handler.
///
/// Serializes as `{ok: false, fieldErrors: {path: message}, formError?}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rejection {
    /// First message per field path.
    pub field_errors: BTreeMap<String, String>,
    /// Message not tied to a field.
    pub form_error: Option<String>,
}

impl Rejection {
    /// Builds a rejection from validation errors.
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        let form_errors = errors.form_errors();
        Self {
            field_errors: errors.field_map(),
            form_error: (!form_errors.is_empty()).then(|| form_errors.join("; ")),
        }
    }

    /// Builds a rejection carrying only a form-level message.
    pub fn form_error(message: impl Into<String>) -> Self {
        Self {
            field_errors: BTreeMap::new(),
            form_error: Some(message.into()),
        }
    }
}

impl From<&ActionError> for Rejection {
    fn from(error: &ActionError) -> Self {
        match error {
            ActionError::Form(FormError::Validation(errors)) => Self::from_errors(errors),
            other => Self::form_error(other.to_string()),
        }
    }
}

impl Serialize for Rejection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.form_error.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("Rejection", len)?;
        state.serialize_field("ok", &false)?;
        state.serialize_field("fieldErrors", &self.field_errors)?;
        if let Some(message) = &self.form_error {
            state.serialize_field("formError", message)?;
        }
        state.end()
    }
}
