//! User accounts known to the authenticator.

use crate::error::Result;
use crate::password::{hash_password, verify_password};

/// A user account for authentication.
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque user id, reported back on successful login.
    pub id: String,
    /// Email address, used as the login name.
    pub email: String,
    /// Argon2 password hash.
    password_hash: String,
    /// Whether the email address has been confirmed.
    pub email_verified: bool,
}

impl User {
    /// Creates a verified user with the given credentials.
    ///
    /// The password will be hashed automatically.
    pub fn create(id: &str, email: &str, password: &str) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            email_verified: true,
        })
    }

    /// Marks the email address as unconfirmed.
    #[must_use]
    pub fn unverified(mut self) -> Self {
        self.email_verified = false;
        self
    }

    /// Checks if the given password matches this user's password.
    pub fn check_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user() {
        let user = User::create("user_123", "test@test.com", "123321").unwrap();
        assert_eq!(user.id, "user_123");
        assert_eq!(user.email, "test@test.com");
        assert!(user.email_verified);
        assert_ne!(user.password_hash, "123321");
    }

    #[test]
    fn test_password_check() {
        let user = User::create("u1", "a@example.com", "secret").unwrap();
        assert!(user.check_password("secret"));
        assert!(!user.check_password("Secret"));
    }

    #[test]
    fn test_unverified() {
        let user = User::create("u1", "a@example.com", "x").unwrap().unverified();
        assert!(!user.email_verified);
    }
}
