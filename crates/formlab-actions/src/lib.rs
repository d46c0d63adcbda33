//! # formlab-actions
//!
//! Submit actions for the login and edit-user forms.
//!
//! An action takes a [`Submission`] (a JSON or urlencoded body), validates it
//! against its form and answers with a status-coded [`ActionResponse`]:
//!
//! - [`submit_login`]: 200 `{ok, userId, sessionId}`, 401 `{ok, errorCode, message?}`
//! - [`submit_edit_user`]: 200 `{ok, user}`
//!
//! Both answer an invalid payload with 400 `{ok, fieldErrors, formError?}`.
//!
//! ## Quick Start
//!
//! ```rust
//! use formlab_actions::{submit_login, Submission};
//! use formlab_auth::{AuthConfig, InMemoryBackend};
//!
//! let auth = InMemoryBackend::new(AuthConfig::default())
//!     .with_mock_user()
//!     .expect("hashing works");
//!
//! let submission = Submission::form_data(
//!     "method=password&email=test%40test.com&password=123321",
//! );
//! let response = submit_login(&auth, &submission);
//! assert_eq!(response.status, 200);
//! assert_eq!(response.json().unwrap()["userId"], "user_123");
//! ```

mod edit_user;
mod error;
mod login;
mod response;
mod submission;

pub use edit_user::{submit_edit_user, EditUserResult};
pub use error::{ActionError, Result};
pub use login::{submit_login, LoginBody, LoginResult};
pub use response::{ActionResponse, Rejection};
pub use submission::{ContentType, Submission};
