//! The login action.

use formlab_auth::{AuthErrorCode, Authenticator};
use formlab_schema::LoginRequest;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::response::{ActionResponse, Rejection};
use crate::submission::Submission;

/// Outcome of a login attempt with a well-formed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    /// Credentials accepted and a session opened.
    Success { user_id: String, session_id: String },
    /// Credentials refused.
    Failure {
        error_code: AuthErrorCode,
        message: Option<String>,
    },
}

impl LoginResult {
    /// Returns whether the login succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl Serialize for LoginResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success {
                user_id,
                session_id,
            } => {
                let mut state = serializer.serialize_struct("LoginResult", 3)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("userId", user_id)?;
                state.serialize_field("sessionId", session_id)?;
                state.end()
            }
            Self::Failure {
                error_code,
                message,
            } => {
                let len = if message.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("LoginResult", len)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("errorCode", error_code)?;
                if let Some(message) = message {
                    state.serialize_field("message", message)?;
                }
                state.end()
            }
        }
    }
}

/// Body of a login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LoginBody {
    /// The payload failed validation; credentials were not checked.
    Rejected(Rejection),
    /// Credentials were checked.
    Result(LoginResult),
}

/// Validates a login submission and checks its credentials.
///
/// Responds 400 with field errors for an invalid payload, 401 with an error
/// code for refused credentials and 200 with the session otherwise.
pub fn submit_login(
    auth: &dyn Authenticator,
    submission: &Submission,
) -> ActionResponse<LoginBody> {
    let request: LoginRequest = match submission.parse() {
        Ok(request) => request,
        Err(e) => {
            info!(error = %e, "login payload rejected");
            return ActionResponse::bad_request(LoginBody::Rejected(Rejection::from(&e)));
        }
    };

    match auth.login(&request.email, &request.password, request.remember_me) {
        Ok(session) => ActionResponse::ok(LoginBody::Result(LoginResult::Success {
            user_id: session.user_id,
            session_id: session.session_key,
        })),
        Err(e) => {
            warn!(error = %e, "login refused");
            ActionResponse::unauthorized(LoginBody::Result(LoginResult::Failure {
                error_code: e.code(),
                message: Some(e.user_message().to_string()),
            }))
        }
    }
}
