//! Error types for authentication.

use serde::Serialize;
use thiserror::Error;

/// Authentication-specific errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email and password do not match.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No account uses the given email.
    #[error("user not found")]
    UserNotFound,

    /// The account exists but its email address is unconfirmed.
    #[error("email address not verified")]
    EmailNotVerified,

    /// Too many failed attempts for this account.
    #[error("too many failed login attempts")]
    RateLimited,

    /// Session not found or expired.
    #[error("session not found or expired")]
    SessionNotFound,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHashError,
}

impl AuthError {
    /// Returns the wire code reported to the login form.
    pub fn code(&self) -> AuthErrorCode {
        match self {
            Self::InvalidCredentials => AuthErrorCode::InvalidCredentials,
            Self::UserNotFound => AuthErrorCode::UserNotFound,
            Self::EmailNotVerified => AuthErrorCode::EmailNotVerified,
            Self::RateLimited => AuthErrorCode::RateLimited,
            Self::SessionNotFound | Self::PasswordHashError => AuthErrorCode::Unknown,
        }
    }

    /// Returns the message shown next to the error code.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::UserNotFound => "No account found for this email",
            Self::EmailNotVerified => "Please verify your email address first",
            Self::RateLimited => "Too many attempts, try again later",
            Self::SessionNotFound | Self::PasswordHashError => "Something went wrong",
        }
    }
}

/// Login failure codes as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorCode {
    InvalidCredentials,
    UserNotFound,
    EmailNotVerified,
    RateLimited,
    Unknown,
}

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;
