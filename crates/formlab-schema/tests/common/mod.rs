#![allow(dead_code)]

use formlab_forms::{Form, ValidationErrors};
use formlab_schema::{EditUserFormState, EditUserRequest, Region};
use serde_json::{json, Value};

pub fn base_payload() -> Value {
    json!({
        "email": "user@example.com",
        "displayName": "Test User",
        "locale": "en-US",
        "contact": {
            "channel": "email",
            "marketingOptIn": false,
            "productUpdatesOptIn": false,
        },
        "favoriteGames": [],
    })
}

pub fn with_region(region: Region, block: Value) -> Value {
    let mut payload = base_payload();
    payload["region"] = json!(region.as_str());
    payload[region.block_key()] = block;
    payload
}

pub fn parse_ok(payload: &Value) -> EditUserRequest {
    EditUserRequest::parse(payload)
        .unwrap_or_else(|e| panic!("Expected valid payload: {payload}\nErrors: {e}"))
}

pub fn parse_err(payload: &Value) -> ValidationErrors {
    match EditUserRequest::parse(payload) {
        Ok(request) => panic!("Expected validation errors for: {payload}\nGot: {request:?}"),
        Err(errors) => errors,
    }
}

pub fn filled_state() -> EditUserFormState {
    let mut state = EditUserFormState::new();
    state.email = "user@example.com".into();
    state.display_name = "Test User".into();
    state
}

/// Returns the paths of `errors` that belong to a region block other than
/// `active`.
pub fn foreign_paths(errors: &ValidationErrors, active: Region) -> Vec<String> {
    errors
        .paths()
        .into_iter()
        .filter(|path| {
            Region::ALL
                .iter()
                .filter(|r| **r != active)
                .any(|r| path.split(['.', '[']).next() == Some(r.block_key()))
        })
        .collect()
}
