//! # formlab-forms
//!
//! Schema-driven form validation.
//!
//! This crate provides:
//! - Field definitions with validators
//! - Object schemas and tag-driven discriminated unions
//! - Errors addressed by field path (`favoriteGames[0].id`)
//! - A controller for dynamic list fields
//! - Decoding of urlencoded form bodies
//!
//! ## Quick Start
//!
//! ```rust
//! use formlab_forms::{FieldPath, FormBuilder, Schema, ValidationErrors};
//! use formlab_forms::fields::{email_field, password_field};
//! use serde_json::json;
//!
//! let schema = FormBuilder::new()
//!     .field(email_field("email", "Email"))
//!     .field(password_field("password", "Password", "Password is required"))
//!     .build();
//!
//! let mut errors = ValidationErrors::new();
//! schema.validate(
//!     &json!({"email": "invalid-email", "password": ""}),
//!     &FieldPath::root(),
//!     &mut errors,
//! );
//!
//! assert_eq!(errors.paths(), vec!["email", "password"]);
//! assert_eq!(errors.messages("email"), vec!["Invalid email"]);
//! ```
//!
//! ## Discriminated Unions
//!
//! ```rust
//! use formlab_forms::{DiscriminatedUnion, FieldPath, FormBuilder, Schema, ValidationErrors};
//! use formlab_forms::fields::{char_field, consent_field};
//! use serde_json::json;
//!
//! let union = DiscriminatedUnion::new(
//!     "region",
//!     FormBuilder::new()
//!         .field(char_field("displayName", "Display Name", 1, "Display Name is required"))
//!         .build(),
//! )
//! .variant(
//!     "EU",
//!     "European Union",
//!     "eu",
//!     FormBuilder::new()
//!         .field(consent_field("gdprConsent", "GDPR Consent", "Consent is required"))
//!         .strict()
//!         .build(),
//! );
//!
//! let mut errors = ValidationErrors::new();
//! union.validate(
//!     &json!({"displayName": "Jane", "region": "EU", "eu": {"gdprConsent": false}}),
//!     &FieldPath::root(),
//!     &mut errors,
//! );
//! assert_eq!(errors.paths(), vec!["eu.gdprConsent"]);
//! ```
//!
//! ## List Fields
//!
//! ```rust
//! use formlab_forms::ArrayField;
//!
//! let mut games: ArrayField<String> = ArrayField::new();
//! games.append();
//! assert_eq!(games.len(), 1);
//! assert!(games.remove(5).is_err());
//! assert_eq!(games.len(), 1);
//! ```

mod array;
mod error;
pub mod fields;
mod form;
mod form_data;
mod path;
mod schema;
mod union;
pub mod validation;

pub use array::{ArrayField, Keyed};
pub use error::{ErrorKind, FieldError, FormError, Result, ValidationErrors};
pub use form::{FieldKind, Form, FormBuilder, FormFieldDef};
pub use form_data::{decode_form_data, MAX_LIST_INDEX};
pub use path::{FieldPath, PathSegment};
pub use schema::{type_name, ObjectSchema, Schema};
pub use union::{DiscriminatedUnion, UnionVariant};
