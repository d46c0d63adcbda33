//! Authenticator settings.

use crate::session::Session;

/// Settings for an authentication backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Failed attempts after which an email is rate limited.
    pub max_failed_attempts: u32,
    /// Minutes after the first failure before an email's counter is dropped.
    pub lockout_minutes: i64,
    /// Lifetime of a normal session, in days.
    pub session_days: i64,
    /// Lifetime of a "remember me" session, in days.
    pub remember_me_days: i64,
    /// Report `USER_NOT_FOUND` instead of `INVALID_CREDENTIALS` for unknown emails.
    pub reveal_unknown_users: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 5,
            lockout_minutes: 15,
            session_days: Session::DEFAULT_EXPIRY_DAYS,
            remember_me_days: Session::REMEMBER_ME_EXPIRY_DAYS,
            reveal_unknown_users: false,
        }
    }
}
