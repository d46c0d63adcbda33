//! Region-specific field blocks of the edit-user form.

use formlab_forms::fields::{boolean_field, char_field, choice_field, consent_field, text_field};
use formlab_forms::{FormBuilder, ObjectSchema};
use serde::{Deserialize, Serialize};

use crate::types::{Region, UsState};

/// Message reported when an EU user has not given GDPR consent.
pub const GDPR_CONSENT_REQUIRED: &str = "GDPR consent is required for EU users";

/// Fields shown to EU users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EuFields {
    pub gdpr_consent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

/// Fields shown to US users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsFields {
    pub state: UsState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_plus4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn_last4: Option<String>,
    pub tax_residency_confirmed: bool,
}

/// Fields shown to UK users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UkFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    pub postcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nin_last4: Option<String>,
}

/// Fields shown to users of any other region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// The region tag together with the one block it selects.
///
/// On the wire this is `"region": "EU", "eu": { ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "region")]
pub enum RegionBlock {
    #[serde(rename = "EU")]
    Eu { eu: EuFields },
    #[serde(rename = "US")]
    Us { us: UsFields },
    #[serde(rename = "UK")]
    Uk { uk: UkFields },
    #[serde(rename = "Other")]
    Other { other: OtherFields },
}

impl RegionBlock {
    /// Returns the freshly initialized block for `region`.
    pub fn initial(region: Region) -> Self {
        match region {
            Region::Eu => Self::Eu {
                eu: EuFields {
                    gdpr_consent: false,
                    vat_id: Some(String::new()),
                    national_id: Some(String::new()),
                },
            },
            Region::Us => Self::Us {
                us: UsFields {
                    state: UsState::default(),
                    zip_plus4: Some(String::new()),
                    ssn_last4: Some(String::new()),
                    tax_residency_confirmed: false,
                },
            },
            Region::Uk => Self::Uk {
                uk: UkFields {
                    county: Some(String::new()),
                    postcode: String::new(),
                    nin_last4: Some(String::new()),
                },
            },
            Region::Other => Self::Other {
                other: OtherFields {
                    notes: Some(String::new()),
                    timezone: Some(String::new()),
                },
            },
        }
    }

    /// Returns the region this block belongs to.
    pub fn region(&self) -> Region {
        match self {
            Self::Eu { .. } => Region::Eu,
            Self::Us { .. } => Region::Us,
            Self::Uk { .. } => Region::Uk,
            Self::Other { .. } => Region::Other,
        }
    }
}

/// Builds the block schema for `region`. Blocks are strict.
pub(crate) fn region_schema(region: Region) -> ObjectSchema {
    let builder = match region {
        Region::Eu => FormBuilder::new()
            .field(consent_field("gdprConsent", "GDPR Consent", GDPR_CONSENT_REQUIRED))
            .field(text_field("vatId", "VAT ID"))
            .field(text_field("nationalId", "National ID")),
        Region::Us => FormBuilder::new()
            .field(choice_field("state", "State", &UsState::choices()))
            .field(text_field("zipPlus4", "ZIP+4"))
            .field(text_field("ssnLast4", "SSN (last 4)"))
            .field(boolean_field("taxResidencyConfirmed", "Tax Residency Confirmed")),
        Region::Uk => FormBuilder::new()
            .field(text_field("county", "County"))
            .field(char_field("postcode", "Postcode", 1, "Postcode is required"))
            .field(text_field("ninLast4", "NIN (last 4)")),
        Region::Other => FormBuilder::new()
            .field(text_field("notes", "Notes"))
            .field(text_field("timezone", "Timezone").help_text("e.g. Europe/Berlin")),
    };
    builder.strict().build()
}
