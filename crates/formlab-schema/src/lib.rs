//! # formlab-schema
//!
//! Form models for the login and edit-user forms, built on `formlab-forms`.
//!
//! The edit-user form is a discriminated union: base fields shared by every
//! user plus exactly one region block selected by the `region` tag.
//!
//! ```rust
//! use formlab_forms::Form;
//! use formlab_schema::{EditUserFormState, Region, GDPR_CONSENT_REQUIRED};
//!
//! let mut state = EditUserFormState::new();
//! state.email = "user@example.com".into();
//! state.display_name = "Test User".into();
//!
//! // EU is the initial region and consent starts unchecked.
//! let errors = state.submit().unwrap_err();
//! assert_eq!(errors.messages("eu.gdprConsent"), vec![GDPR_CONSENT_REQUIRED]);
//!
//! state.switch_region(Region::Other);
//! assert!(state.submit().is_ok());
//! ```

mod catalog;
mod edit_user;
mod login;
mod region;
mod state;
mod types;

pub use catalog::{find_game, Game, AVAILABLE_GAMES};
pub use edit_user::{
    base_fields, region_fields, Address, ContactPreference, EditUserRequest, FavoriteGameEntry,
    UserBase, UserSummary,
};
pub use login::{LoginRequest, PASSWORD_REQUIRED};
pub use region::{EuFields, OtherFields, RegionBlock, UkFields, UsFields, GDPR_CONSENT_REQUIRED};
pub use state::{EditUserFormState, DEFAULT_LOCALE, DEFAULT_REGION};
pub use types::{AgeRating, AuthMethod, ContactChannel, GamePlatform, Region, UsState};
