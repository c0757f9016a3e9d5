//! Sweets ordering rule value object
//!
//! Selects which sweet attribute a gift is sorted by. Rules arrive from
//! callers as the enum itself, a name ("price", "sugar-weight") or the
//! legacy numeric code (0..=4).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GiftError;

/// Attribute a gift's items are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SweetsOrderRule {
    /// Sweet name, lexicographic
    #[default]
    Name,
    /// Manufacturer, lexicographic
    Manufacturer,
    /// Price, ascending
    Price,
    /// Weight, ascending
    Weight,
    /// Sugar weight, ascending
    #[serde(alias = "sugar")]
    SugarWeight,
}

impl SweetsOrderRule {
    pub const ALL: [SweetsOrderRule; 5] = [
        SweetsOrderRule::Name,
        SweetsOrderRule::Manufacturer,
        SweetsOrderRule::Price,
        SweetsOrderRule::Weight,
        SweetsOrderRule::SugarWeight,
    ];

    /// Canonical name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            SweetsOrderRule::Name => "name",
            SweetsOrderRule::Manufacturer => "manufacturer",
            SweetsOrderRule::Price => "price",
            SweetsOrderRule::Weight => "weight",
            SweetsOrderRule::SugarWeight => "sugar-weight",
        }
    }
}

impl std::fmt::Display for SweetsOrderRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SweetsOrderRule {
    type Err = GiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "name" => Ok(SweetsOrderRule::Name),
            "manufacturer" => Ok(SweetsOrderRule::Manufacturer),
            "price" => Ok(SweetsOrderRule::Price),
            "weight" => Ok(SweetsOrderRule::Weight),
            "sugar-weight" | "sugarweight" | "sugar" => Ok(SweetsOrderRule::SugarWeight),
            _ => Err(GiftError::UnknownOrderRule {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for SweetsOrderRule {
    type Error = GiftError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&String> for SweetsOrderRule {
    type Error = GiftError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i32> for SweetsOrderRule {
    type Error = GiftError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| GiftError::UnknownOrderRule {
                value: code.to_string(),
            })
    }
}
