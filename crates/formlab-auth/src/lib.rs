//! # formlab-auth
//!
//! Credential checking for the login form.
//!
//! This crate provides:
//! - the [`Authenticator`] trait that login actions call
//! - `User` with Argon2 password hashes
//! - `Session` with random 64-character keys
//! - [`InMemoryBackend`], seeded with the demo account
//! - `AuthErrorCode`, the wire codes of a failed login
//!
//! ## Quick Start
//!
//! ```rust
//! use formlab_auth::{AuthConfig, AuthErrorCode, Authenticator, InMemoryBackend};
//!
//! let backend = InMemoryBackend::new(AuthConfig::default())
//!     .with_mock_user()
//!     .expect("hashing works");
//!
//! let session = backend.login("test@test.com", "123321", false).unwrap();
//! assert_eq!(session.user_id, "user_123");
//!
//! let err = backend.login("test@test.com", "wrong", false).unwrap_err();
//! assert_eq!(err.code(), AuthErrorCode::InvalidCredentials);
//! ```
//!
//! ## Password Hashing
//!
//! Passwords are hashed using Argon2id.
//!
//! ```rust
//! use formlab_auth::{hash_password, verify_password};
//!
//! let hash = hash_password("secret123").expect("hashing works");
//! assert!(verify_password("secret123", &hash));
//! assert!(!verify_password("wrong", &hash));
//! ```

pub mod backends;
mod config;
mod error;
mod password;
mod session;
mod user;

pub use backends::InMemoryBackend;
pub use config::AuthConfig;
pub use error::{AuthError, AuthErrorCode, Result};
pub use password::{hash_password, verify_password};
pub use session::Session;
pub use user::User;

/// Email of the demo account.
pub const MOCK_EMAIL: &str = "test@test.com";

/// Password of the demo account.
pub const MOCK_PASSWORD: &str = "123321";

/// Id of the demo account.
pub const MOCK_USER_ID: &str = "user_123";

/// Checks login credentials and opens sessions.
pub trait Authenticator: Send + Sync {
    /// Authenticates `email` / `password` and creates a session.
    fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<Session>;
}
