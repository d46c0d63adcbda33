//! Submitted form bodies.

use std::fmt;
use std::str::FromStr;

use formlab_forms::{Form, FormError};
use serde_json::Value;

use crate::error::{ActionError, Result};

/// Body encodings a form can be submitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `application/json`
    Json,
    /// `application/x-www-form-urlencoded`
    FormData,
}

impl ContentType {
    /// Returns the MIME type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormData => "application/x-www-form-urlencoded",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ActionError;

    /// Parses a `Content-Type` header value, ignoring parameters and case.
    fn from_str(s: &str) -> Result<Self> {
        let mime = s.split(';').next().unwrap_or_default().trim();
        if mime.eq_ignore_ascii_case("application/json") {
            Ok(Self::Json)
        } else if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
            Ok(Self::FormData)
        } else {
            Err(ActionError::UnsupportedContentType(s.to_string()))
        }
    }
}

/// A submitted form body together with its encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Body encoding.
    pub content_type: ContentType,
    /// Raw body.
    pub body: String,
}

impl Submission {
    /// Creates a submission.
    pub fn new(content_type: ContentType, body: impl Into<String>) -> Self {
        Self {
            content_type,
            body: body.into(),
        }
    }

    /// Creates a JSON submission.
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(ContentType::Json, body)
    }

    /// Creates a JSON submission from a value.
    pub fn from_value(value: &Value) -> Self {
        Self::json(value.to_string())
    }

    /// Creates an urlencoded form submission.
    pub fn form_data(body: impl Into<String>) -> Self {
        Self::new(ContentType::FormData, body)
    }

    /// Decodes and validates the body as form `F`.
    pub fn parse<F: Form>(&self) -> Result<F> {
        match self.content_type {
            ContentType::Json => {
                let value: Value = serde_json::from_str(&self.body).map_err(FormError::from)?;
                Ok(F::parse(&value).map_err(FormError::Validation)?)
            }
            ContentType::FormData => Ok(F::parse_form_data(&self.body)?),
        }
    }
}
