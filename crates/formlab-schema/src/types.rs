//! Enumerations shared by the forms, with their wire values and labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares the wire value and label of every variant of a plain enum,
/// plus `ALL`, `as_str`, `label`, `choices`, `Display` and `FromStr`.
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        impl $name {
            /// All variants in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            /// Returns the human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Returns `(wire value, label)` pairs for select fields.
            pub fn choices() -> Vec<(&'static str, &'static str)> {
                Self::ALL.iter().map(|v| (v.as_str(), v.label())).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| format!("unknown {}: {s}", stringify!($name)))
            }
        }
    };
}

/// Authentication methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMethod {
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "magic_link")]
    MagicLink,
    #[serde(rename = "oauth")]
    OAuth,
}

wire_enum!(AuthMethod {
    Password => ("password", "Password"),
    MagicLink => ("magic_link", "Magic Link"),
    OAuth => ("oauth", "OAuth"),
});

/// Region of a user; selects the region-specific block of the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "Other")]
    Other,
}

wire_enum!(Region {
    Eu => ("EU", "European Union"),
    Us => ("US", "United States"),
    Uk => ("UK", "United Kingdom"),
    Other => ("Other", "Other"),
});

impl Region {
    /// Returns the key of the block holding this region's fields.
    pub fn block_key(self) -> &'static str {
        match self {
            Self::Eu => "eu",
            Self::Us => "us",
            Self::Uk => "uk",
            Self::Other => "other",
        }
    }
}

/// Preferred contact channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    #[default]
    Email,
    Phone,
}

wire_enum!(ContactChannel {
    Email => ("email", "Email"),
    Phone => ("phone", "Phone"),
});

/// US states offered by the edit form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    #[default]
    Ca,
    Ny,
    Tx,
    Fl,
    Wa,
}

wire_enum!(UsState {
    Ca => ("CA", "California"),
    Ny => ("NY", "New York"),
    Tx => ("TX", "Texas"),
    Fl => ("FL", "Florida"),
    Wa => ("WA", "Washington"),
});

/// Platforms a catalog game runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePlatform {
    Pc,
    PlayStation,
    Xbox,
    Switch,
    Mobile,
}

wire_enum!(GamePlatform {
    Pc => ("pc", "PC"),
    PlayStation => ("playstation", "PlayStation"),
    Xbox => ("xbox", "Xbox"),
    Switch => ("switch", "Switch"),
    Mobile => ("mobile", "Mobile"),
});

/// ESRB-style age ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRating {
    #[serde(rename = "E")]
    Everyone,
    #[serde(rename = "E10+")]
    Everyone10Plus,
    #[serde(rename = "T")]
    Teen,
    #[serde(rename = "M")]
    Mature,
    #[serde(rename = "AO")]
    AdultsOnly,
}

wire_enum!(AgeRating {
    Everyone => ("E", "Everyone"),
    Everyone10Plus => ("E10+", "Everyone 10+"),
    Teen => ("T", "Teen"),
    Mature => ("M", "Mature"),
    AdultsOnly => ("AO", "Adults Only"),
});
