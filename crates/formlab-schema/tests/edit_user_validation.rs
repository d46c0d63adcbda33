//! Tests for edit-user payload validation.

mod common;
use common::*;

use formlab_forms::{ErrorKind, Form};
use formlab_schema::{EditUserRequest, Region, RegionBlock, UsState, GDPR_CONSENT_REQUIRED};
use serde_json::json;

#[test]
fn eu_without_consent_fails_at_consent_path() {
    let errors = parse_err(&with_region(
        Region::Eu,
        json!({"gdprConsent": false, "vatId": "DE123"}),
    ));
    assert_eq!(errors.paths(), vec!["eu.gdprConsent"]);
    assert_eq!(errors.messages("eu.gdprConsent"), vec![GDPR_CONSENT_REQUIRED]);
}

#[test]
fn eu_with_consent_is_valid() {
    let request = parse_ok(&with_region(Region::Eu, json!({"gdprConsent": true})));
    assert_eq!(request.region(), Region::Eu);
}

#[test]
fn us_new_york_is_valid() {
    let request = parse_ok(&with_region(
        Region::Us,
        json!({"state": "NY", "taxResidencyConfirmed": true}),
    ));
    match request.block {
        RegionBlock::Us { us } => {
            assert_eq!(us.state, UsState::Ny);
            assert!(us.tax_residency_confirmed);
        }
        other => panic!("Expected US block, got {other:?}"),
    }
}

#[test]
fn us_rejects_unknown_state() {
    let errors = parse_err(&with_region(
        Region::Us,
        json!({"state": "ZZ", "taxResidencyConfirmed": false}),
    ));
    assert_eq!(errors.paths(), vec!["us.state"]);
    assert_eq!(errors.get("us.state").unwrap().kind, ErrorKind::FieldFormatInvalid);
}

#[test]
fn inactive_blocks_are_ignored() {
    let mut payload = with_region(Region::Us, json!({"state": "NY", "taxResidencyConfirmed": false}));
    payload["eu"] = json!({"gdprConsent": false});
    payload["uk"] = json!({"unexpected": 1});

    let request = parse_ok(&payload);
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("eu").is_none());
    assert!(json.get("uk").is_none());
}

#[test]
fn missing_discriminator() {
    let errors = parse_err(&base_payload());
    let error = errors.get("region").unwrap();
    assert_eq!(error.kind, ErrorKind::SchemaMismatch);
    assert_eq!(
        error.message,
        "Invalid discriminator value. Expected 'EU' | 'US' | 'UK' | 'Other'"
    );
}

#[test]
fn unknown_discriminator() {
    let mut payload = base_payload();
    payload["region"] = json!("APAC");
    let errors = parse_err(&payload);
    assert_eq!(errors.paths(), vec!["region"]);
}

#[test]
fn missing_active_block() {
    let mut payload = base_payload();
    payload["region"] = json!("UK");
    let errors = parse_err(&payload);
    assert_eq!(errors.paths(), vec!["uk"]);
    assert_eq!(errors.get("uk").unwrap().kind, ErrorKind::SchemaMismatch);
}

#[test]
fn foreign_fields_in_active_block() {
    let errors = parse_err(&with_region(
        Region::Other,
        json!({"timezone": "Europe/Berlin", "gdprConsent": true}),
    ));
    let error = errors.get("other").unwrap();
    assert_eq!(error.kind, ErrorKind::SchemaMismatch);
    assert_eq!(error.message, "Unrecognized key(s) in object: 'gdprConsent'");
}

#[test]
fn base_errors_come_before_region_errors() {
    let mut payload = with_region(Region::Uk, json!({}));
    payload["email"] = json!("not-an-email");
    payload["displayName"] = json!("");
    payload["locale"] = json!("e");

    let errors = parse_err(&payload);
    assert_eq!(
        errors.paths(),
        vec!["email", "displayName", "locale", "uk.postcode"]
    );
    assert_eq!(errors.messages("displayName"), vec!["Display Name is required"]);
    assert_eq!(errors.messages("locale"), vec!["Locale must be at least 2 chars"]);
}

#[test]
fn favorite_game_errors_are_index_scoped() {
    let mut payload = with_region(Region::Other, json!({}));
    payload["favoriteGames"] = json!([
        {"id": "g1", "favoriteSince": "2024-01-31", "pinned": true},
        {"id": "", "favoriteSince": "31/01/2024"},
    ]);

    let errors = parse_err(&payload);
    assert_eq!(
        errors.paths(),
        vec!["favoriteGames[1].id", "favoriteGames[1].favoriteSince"]
    );
    assert_eq!(errors.messages("favoriteGames[1].id"), vec!["Game ID is required"]);
    assert_eq!(
        errors.messages("favoriteGames[1].favoriteSince"),
        vec!["Invalid date format (YYYY-MM-DD)"]
    );
}

#[test]
fn duplicate_favorites_are_allowed() {
    let mut payload = with_region(Region::Other, json!({}));
    payload["favoriteGames"] = json!([{"id": "g1"}, {"id": "g1", "favoriteSince": ""}]);
    let request = parse_ok(&payload);
    assert_eq!(request.base.favorite_games.len(), 2);
}

#[test]
fn address_is_validated_when_present() {
    let mut payload = with_region(Region::Other, json!({}));
    payload["address"] = json!({
        "line1": "",
        "city": "Berlin",
        "postalCode": "10115",
        "country": "D",
    });

    let errors = parse_err(&payload);
    let fields = errors.field_map();
    assert_eq!(fields.get("address.line1").map(String::as_str), Some("Line 1 is required"));
    assert_eq!(
        fields.get("address.country").map(String::as_str),
        Some("Country code must be at least 2 chars")
    );
}

#[test]
fn valid_payload_revalidates_cleanly() {
    for region in Region::ALL {
        let block = match region {
            Region::Eu => json!({"gdprConsent": true, "vatId": ""}),
            Region::Us => json!({"state": "WA", "taxResidencyConfirmed": false}),
            Region::Uk => json!({"postcode": "SW1A 1AA"}),
            Region::Other => json!({"notes": "hello"}),
        };
        let request = parse_ok(&with_region(*region, block));
        assert!(request.validate().is_ok(), "{region} failed revalidation");

        let again = parse_ok(&serde_json::to_value(&request).unwrap());
        assert_eq!(again, request);
    }
}

#[test]
fn form_data_submission() {
    let body = "email=user%40example.com&displayName=Test+User&locale=en-US\
                &contact.channel=phone&contact.marketingOptIn=on\
                &region=US&us.state=NY\
                &favoriteGames%5B0%5D.id=g3&favoriteGames%5B0%5D.pinned=on";

    let request = EditUserRequest::parse_form_data(body).unwrap();
    assert_eq!(request.base.display_name, "Test User");
    assert!(request.base.contact.marketing_opt_in);
    assert!(!request.base.contact.product_updates_opt_in);
    assert_eq!(request.base.favorite_games[0].id, "g3");
    assert_eq!(request.base.favorite_games[0].pinned, Some(true));
    match request.block {
        RegionBlock::Us { us } => assert!(!us.tax_residency_confirmed),
        other => panic!("Expected US block, got {other:?}"),
    }
}

#[test]
fn form_data_sparse_favorites_are_compacted() {
    let body = "email=user%40example.com&displayName=Test+User&locale=en-US\
                &contact.channel=email\
                &region=US&us.state=NY\
                &favoriteGames%5B5%5D.id=g2&favoriteGames%5B2%5D.id=g1";

    let request = EditUserRequest::parse_form_data(body).unwrap();
    let ids: Vec<_> = request
        .base
        .favorite_games
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(ids, ["g1", "g2"]);
}
