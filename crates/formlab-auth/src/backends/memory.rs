//! In-memory authentication backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::error::{AuthError, Result};
use crate::session::Session;
use crate::user::User;
use crate::{Authenticator, MOCK_EMAIL, MOCK_PASSWORD, MOCK_USER_ID};

/// Authentication backend holding users and sessions in memory.
///
/// Users are looked up by case-insensitive email. Failed attempts are counted
/// per registered email, reset by a successful login and forgotten once
/// `lockout_minutes` have passed since the first failure.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    config: AuthConfig,
    users: HashMap<String, User>,
    failed_attempts: Mutex<HashMap<String, FailedAttempts>>,
    sessions: Mutex<HashMap<String, Session>>,
}

/// Failure counter of one email.
#[derive(Debug, Clone, Copy)]
struct FailedAttempts {
    count: u32,
    first_failure: DateTime<Utc>,
}

impl FailedAttempts {
    fn is_stale(&self, window: Duration) -> bool {
        Utc::now() - self.first_failure > window
    }
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers the demo account `test@test.com` / `123321`.
    pub fn with_mock_user(self) -> Result<Self> {
        let user = User::create(MOCK_USER_ID, MOCK_EMAIL, MOCK_PASSWORD)?;
        Ok(self.with_user(user))
    }

    /// Registers a user, replacing any user with the same email.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.email.to_lowercase(), user);
        self
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    fn lockout_window(&self) -> Duration {
        Duration::minutes(self.config.lockout_minutes)
    }

    fn lock_failed_attempts(&self) -> MutexGuard<'_, HashMap<String, FailedAttempts>> {
        self.failed_attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Checks credentials and returns the matching user.
    ///
    /// Only registered emails are counted. The counter lock is not held while
    /// the password hash is checked.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let key = email.to_lowercase();

        {
            let mut failed = self.lock_failed_attempts();
            if let Some(entry) = failed.get(&key).copied() {
                if entry.is_stale(self.lockout_window()) {
                    debug!(email = %key, "lockout window passed");
                    failed.remove(&key);
                } else if entry.count >= self.config.max_failed_attempts {
                    warn!(email = %key, attempts = entry.count, "login rate limited");
                    return Err(AuthError::RateLimited);
                }
            }
        }

        let Some(user) = self.users.get(&key) else {
            debug!("login for unknown email");
            return Err(if self.config.reveal_unknown_users {
                AuthError::UserNotFound
            } else {
                AuthError::InvalidCredentials
            });
        };

        if !user.check_password(password) {
            self.lock_failed_attempts()
                .entry(key)
                .or_insert_with(|| FailedAttempts {
                    count: 0,
                    first_failure: Utc::now(),
                })
                .count += 1;
            debug!(user_id = %user.id, "wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        if !user.email_verified {
            return Err(AuthError::EmailNotVerified);
        }

        self.lock_failed_attempts().remove(&key);
        Ok(user.clone())
    }

    /// Looks up a live session by key.
    pub fn get_session(&self, session_key: &str) -> Result<Session> {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions
            .get(session_key)
            .filter(|session| !session.is_expired())
            .cloned()
            .ok_or(AuthError::SessionNotFound)
    }

    /// Ends a session.
    pub fn logout(&self, session_key: &str) -> Result<()> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions
            .remove(session_key)
            .map(|_| ())
            .ok_or(AuthError::SessionNotFound)
    }

    /// Drops expired sessions and stale failure counters.
    ///
    /// Returns how many sessions were removed.
    pub fn clear_expired(&self) -> usize {
        let window = self.lockout_window();
        self.lock_failed_attempts()
            .retain(|_, entry| !entry.is_stale(window));

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        before - sessions.len()
    }
}

impl Authenticator for InMemoryBackend {
    fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<Session> {
        let user = self.authenticate(email, password)?;

        let days = if remember_me {
            self.config.remember_me_days
        } else {
            self.config.session_days
        };
        let session = Session::for_user(&user, remember_me, days);
        info!(user_id = %user.id, remember_me, "session created");

        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.session_key.clone(), session.clone());
        Ok(session)
    }
}
