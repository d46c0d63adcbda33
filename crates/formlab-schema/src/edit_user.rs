//! Edit-user form: base fields plus one region block.

use std::sync::LazyLock;

use formlab_forms::fields::{
    array_field, boolean_field, char_field, choice_field, date_field, email_field, object_field,
    text_field,
};
use formlab_forms::{DiscriminatedUnion, Form, FormBuilder, FormFieldDef, ObjectSchema};
use serde::{Deserialize, Serialize};

use crate::region::{region_schema, RegionBlock};
use crate::types::{ContactChannel, Region};

static EDIT_USER_SCHEMA: LazyLock<DiscriminatedUnion> = LazyLock::new(|| {
    Region::ALL.iter().fold(
        DiscriminatedUnion::new("region", base_schema()),
        |union, region| {
            union.variant(
                region.as_str(),
                region.label(),
                region.block_key(),
                region_schema(*region),
            )
        },
    )
});

fn contact_schema() -> ObjectSchema {
    FormBuilder::new()
        .field(choice_field("channel", "Contact Channel", &ContactChannel::choices()))
        .field(boolean_field("marketingOptIn", "Marketing Opt-In"))
        .field(boolean_field("productUpdatesOptIn", "Product Updates Opt-In"))
        .build()
}

fn favorite_game_schema() -> ObjectSchema {
    FormBuilder::new()
        .field(char_field("id", "Game", 1, "Game ID is required"))
        .field(date_field("favoriteSince", "Favorite Since"))
        .field(boolean_field("pinned", "Pinned").optional())
        .build()
}

fn address_schema() -> ObjectSchema {
    FormBuilder::new()
        .field(char_field("line1", "Address Line 1", 1, "Line 1 is required"))
        .field(text_field("line2", "Address Line 2"))
        .field(char_field("city", "City", 1, "City is required"))
        .field(char_field("postalCode", "Postal Code", 1, "Postal Code is required"))
        .field(char_field(
            "country",
            "Country",
            2,
            "Country code must be at least 2 chars",
        ))
        .build()
}

fn base_schema() -> ObjectSchema {
    FormBuilder::new()
        .field(email_field("email", "Email"))
        .field(char_field("displayName", "Display Name", 1, "Display Name is required"))
        .field(char_field("locale", "Locale", 2, "Locale must be at least 2 chars"))
        .field(object_field("contact", "Contact", contact_schema()))
        .field(
            array_field("favoriteGames", "Favorite Games", favorite_game_schema())
                .default_value(serde_json::Value::Array(Vec::new())),
        )
        .field(object_field("address", "Address", address_schema()).optional())
        .build()
}

/// How and about what a user wants to be contacted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPreference {
    pub channel: ContactChannel,
    pub marketing_opt_in: bool,
    pub product_updates_opt_in: bool,
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// One entry of the favorite-games list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteGameEntry {
    /// Catalog game id.
    pub id: String,
    /// `YYYY-MM-DD`, or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl FavoriteGameEntry {
    /// Creates an entry for a game id with no preferences set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Default for FavoriteGameEntry {
    fn default() -> Self {
        Self {
            id: String::new(),
            favorite_since: Some(String::new()),
            pinned: Some(false),
        }
    }
}

/// Fields every region shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBase {
    pub email: String,
    pub display_name: String,
    pub locale: String,
    pub contact: ContactPreference,
    #[serde(default)]
    pub favorite_games: Vec<FavoriteGameEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// An edit-user submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditUserRequest {
    #[serde(flatten)]
    pub base: UserBase,
    #[serde(flatten)]
    pub block: RegionBlock,
}

impl EditUserRequest {
    /// Returns the selected region.
    pub fn region(&self) -> Region {
        self.block.region()
    }

    /// Returns the summary of the user this submission describes.
    pub fn summary(&self, id: impl Into<String>) -> UserSummary {
        UserSummary {
            id: id.into(),
            email: self.base.email.clone(),
            display_name: self.base.display_name.clone(),
            region: self.region(),
            locale: self.base.locale.clone(),
        }
    }
}

impl Form for EditUserRequest {
    type Schema = DiscriminatedUnion;

    fn schema() -> &'static DiscriminatedUnion {
        &EDIT_USER_SCHEMA
    }
}

/// Public view of a user after a successful edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub region: Region,
    pub locale: String,
}

/// Returns the base field definitions of the edit-user form.
pub fn base_fields() -> &'static [FormFieldDef] {
    EDIT_USER_SCHEMA.base().fields()
}

/// Returns the field definitions active for `region`.
pub fn region_fields(region: Region) -> &'static [FormFieldDef] {
    EDIT_USER_SCHEMA
        .variant_for(region.as_str())
        .map(|variant| variant.schema.fields())
        .unwrap_or_default()
}
