//! Login form.

use std::sync::LazyLock;

use formlab_forms::fields::{boolean_field, email_field, literal_field, password_field};
use formlab_forms::{Form, FormBuilder, ObjectSchema};
use serde::{Deserialize, Serialize};

use crate::types::AuthMethod;

/// Message reported for an empty or missing password.
pub const PASSWORD_REQUIRED: &str = "Password is required";

static LOGIN_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    FormBuilder::new()
        .field(literal_field("method", "Method", AuthMethod::Password.as_str()))
        .field(email_field("email", "Email"))
        .field(password_field("password", "Password", PASSWORD_REQUIRED))
        .field(boolean_field("rememberMe", "Remember me").default_value(false))
        .build()
});

/// A password login submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub method: AuthMethod,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self {
            method: AuthMethod::Password,
            email: String::new(),
            password: String::new(),
            remember_me: false,
        }
    }
}

impl Form for LoginRequest {
    type Schema = ObjectSchema;

    fn schema() -> &'static ObjectSchema {
        &LOGIN_SCHEMA
    }
}
