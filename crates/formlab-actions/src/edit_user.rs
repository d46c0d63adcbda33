//! The edit-user action.

use formlab_schema::{EditUserRequest, UserSummary};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::response::{ActionResponse, Rejection};
use crate::submission::Submission;

/// Outcome of an edit-user submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditUserResult {
    /// The submission was valid.
    Updated(UserSummary),
    /// The submission was invalid.
    Rejected(Rejection),
}

impl EditUserResult {
    /// Returns whether the submission was accepted.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

impl Serialize for EditUserResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Updated(user) => {
                let mut state = serializer.serialize_struct("EditUserResult", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("user", user)?;
                state.end()
            }
            Self::Rejected(rejection) => rejection.serialize(serializer),
        }
    }
}

/// Validates an edit-user submission for the user `user_id`.
///
/// Responds 200 with the user summary, or 400 with path-keyed field errors.
pub fn submit_edit_user(user_id: &str, submission: &Submission) -> ActionResponse<EditUserResult> {
    match submission.parse::<EditUserRequest>() {
        Ok(request) => {
            info!(user_id, region = %request.region(), "user updated");
            ActionResponse::ok(EditUserResult::Updated(request.summary(user_id)))
        }
        Err(e) => {
            debug!(error = %e, "edit-user payload rejected");
            ActionResponse::bad_request(EditUserResult::Rejected(Rejection::from(&e)))
        }
    }
}
