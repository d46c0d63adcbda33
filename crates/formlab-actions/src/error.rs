//! Error types for submissions.

use formlab_forms::FormError;
use thiserror::Error;

/// Submission-specific errors.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The body's content type is neither JSON nor urlencoded form data.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The body could not be decoded or failed validation.
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result type alias for submission handling.
pub type Result<T> = std::result::Result<T, ActionError>;
