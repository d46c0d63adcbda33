//! Login sessions.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::user::User;

/// A session created by a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session key (64 character hex string).
    pub session_key: String,
    /// Id of the logged-in user.
    pub user_id: String,
    /// Whether the user asked to stay logged in.
    pub remember_me: bool,
    /// Session expiration timestamp.
    pub expire_date: DateTime<Utc>,
}

impl Session {
    /// Default session expiration time (1 day).
    pub const DEFAULT_EXPIRY_DAYS: i64 = 1;

    /// Expiration time of a remembered session (2 weeks).
    pub const REMEMBER_ME_EXPIRY_DAYS: i64 = 14;

    /// Creates a new session for a user, valid for `days` days.
    pub fn for_user(user: &User, remember_me: bool, days: i64) -> Self {
        Self {
            session_key: generate_session_key(),
            user_id: user.id.clone(),
            remember_me,
            expire_date: Utc::now() + Duration::days(days),
        }
    }

    /// Returns whether this session has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expire_date
    }
}

/// Generates a cryptographically secure session key.
fn generate_session_key() -> String {
    use rand::RngExt;
    let mut rng = rand::rng();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    hex::encode(&bytes)
}

mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::create("user_123", "test@test.com", "123321").unwrap()
    }

    #[test]
    fn test_session_key_generation() {
        let key1 = generate_session_key();
        let key2 = generate_session_key();

        assert_eq!(key1.len(), 64);
        assert!(key1.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_session_for_user() {
        let session = Session::for_user(&user(), true, Session::REMEMBER_ME_EXPIRY_DAYS);
        assert_eq!(session.user_id, "user_123");
        assert!(session.remember_me);
        assert!(session.expire_date > Utc::now() + Duration::days(13));
    }

    #[test]
    fn test_session_expiration() {
        let mut session = Session::for_user(&user(), false, Session::DEFAULT_EXPIRY_DAYS);
        assert!(!session.is_expired());

        session.expire_date = Utc::now() - Duration::days(1);
        assert!(session.is_expired());
    }
}
