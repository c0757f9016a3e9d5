//! Sweet entity - a piece of confectionery that can go into a gift
//!
//! Every sweet shares a base record (name, manufacturer, weights, price) and
//! carries a variant payload for subtype-only fields:
//! - `Plain` - a generic sweet
//! - `Lollipop` - adds a flavor
//! - `Chocolate` - adds the kind of chocolate

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GiftError, GiftResult};

/// Variant-specific part of a sweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SweetKind {
    /// Generic sweet without extra attributes
    #[default]
    Plain,
    /// Lollipop with a flavor
    Lollipop { flavor: String },
    /// Chocolate sweet with the kind of chocolate used
    Chocolate { kind_of_chocolate: String },
}

impl SweetKind {
    /// Human-readable label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            SweetKind::Plain => "Sweet",
            SweetKind::Lollipop { .. } => "Lollipop",
            SweetKind::Chocolate { .. } => "Chocolate sweet",
        }
    }

    fn validated(self) -> GiftResult<Self> {
        match self {
            SweetKind::Plain => Ok(SweetKind::Plain),
            SweetKind::Lollipop { flavor } => Ok(SweetKind::Lollipop {
                flavor: require_text("flavor", flavor)?,
            }),
            SweetKind::Chocolate { kind_of_chocolate } => Ok(SweetKind::Chocolate {
                kind_of_chocolate: require_text("kind_of_chocolate", kind_of_chocolate)?,
            }),
        }
    }
}

/// A piece of confectionery
///
/// Fields are private so every change goes through the checks in the
/// constructors and setters. Deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SweetRecord", into = "SweetRecord")]
pub struct Sweet {
    /// Catalog identity, assigned by the caller
    id: u32,
    name: String,
    manufacturer: String,
    /// Total weight in grams
    weight: f64,
    /// Sugar content in grams
    sugar_weight: f64,
    price: Decimal,
    kind: SweetKind,
}

impl Sweet {
    /// Create a plain sweet
    ///
    /// Fails on empty text, non-positive weight, negative sugar, sugar
    /// heavier than the sweet, or a negative price.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        weight: f64,
        sugar_weight: f64,
        price: Decimal,
    ) -> GiftResult<Self> {
        let weight = require_positive("weight", weight)?;
        let sugar_weight = require_sugar(sugar_weight, weight)?;

        Ok(Self {
            id,
            name: require_text("name", name.into())?,
            manufacturer: require_text("manufacturer", manufacturer.into())?,
            weight,
            sugar_weight,
            price: require_price(price)?,
            kind: SweetKind::Plain,
        })
    }

    /// Turn this sweet into a lollipop with the given flavor
    pub fn into_lollipop(self, flavor: impl Into<String>) -> GiftResult<Self> {
        self.with_kind(SweetKind::Lollipop {
            flavor: flavor.into(),
        })
    }

    /// Turn this sweet into a chocolate sweet
    pub fn into_chocolate(self, kind_of_chocolate: impl Into<String>) -> GiftResult<Self> {
        self.with_kind(SweetKind::Chocolate {
            kind_of_chocolate: kind_of_chocolate.into(),
        })
    }

    /// Replace the variant payload
    pub fn with_kind(mut self, kind: SweetKind) -> GiftResult<Self> {
        self.kind = kind.validated()?;
        Ok(self)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn sugar_weight(&self) -> f64 {
        self.sugar_weight
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn kind(&self) -> &SweetKind {
        &self.kind
    }

    /// Flavor, for lollipops
    pub fn flavor(&self) -> Option<&str> {
        match &self.kind {
            SweetKind::Lollipop { flavor } => Some(flavor),
            _ => None,
        }
    }

    /// Kind of chocolate, for chocolate sweets
    pub fn kind_of_chocolate(&self) -> Option<&str> {
        match &self.kind {
            SweetKind::Chocolate { kind_of_chocolate } => Some(kind_of_chocolate),
            _ => None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> GiftResult<()> {
        self.name = require_text("name", name.into())?;
        Ok(())
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) -> GiftResult<()> {
        self.manufacturer = require_text("manufacturer", manufacturer.into())?;
        Ok(())
    }

    /// Set the weight; the current sugar weight must still fit
    pub fn set_weight(&mut self, weight: f64) -> GiftResult<()> {
        let weight = require_positive("weight", weight)?;
        require_sugar(self.sugar_weight, weight)?;
        self.weight = weight;
        Ok(())
    }

    pub fn set_sugar_weight(&mut self, sugar_weight: f64) -> GiftResult<()> {
        self.sugar_weight = require_sugar(sugar_weight, self.weight)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Decimal) -> GiftResult<()> {
        self.price = require_price(price)?;
        Ok(())
    }
}

impl fmt::Display for Sweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, {}: {}, Manufacturer: {}, Weight: {} g, Sugar: {} g, Price: {}",
            self.id,
            self.kind.label(),
            self.name,
            self.manufacturer,
            self.weight,
            self.sugar_weight,
            self.price
        )?;

        match &self.kind {
            SweetKind::Plain => Ok(()),
            SweetKind::Lollipop { flavor } => write!(f, ", Flavor: {}", flavor),
            SweetKind::Chocolate { kind_of_chocolate } => {
                write!(f, ", Chocolate: {}", kind_of_chocolate)
            }
        }
    }
}

/// Serialized shape of a sweet (base fields with the variant flattened in)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SweetRecord {
    id: u32,
    name: String,
    manufacturer: String,
    weight: f64,
    sugar_weight: f64,
    price: Decimal,
    #[serde(flatten)]
    kind: SweetKind,
}

impl TryFrom<SweetRecord> for Sweet {
    type Error = GiftError;

    fn try_from(record: SweetRecord) -> GiftResult<Self> {
        Sweet::new(
            record.id,
            record.name,
            record.manufacturer,
            record.weight,
            record.sugar_weight,
            record.price,
        )?
        .with_kind(record.kind)
    }
}

impl From<Sweet> for SweetRecord {
    fn from(sweet: Sweet) -> Self {
        Self {
            id: sweet.id,
            name: sweet.name,
            manufacturer: sweet.manufacturer,
            weight: sweet.weight,
            sugar_weight: sweet.sugar_weight,
            price: sweet.price,
            kind: sweet.kind,
        }
    }
}

fn require_text(field: &'static str, value: String) -> GiftResult<String> {
    if value.trim().is_empty() {
        return Err(GiftError::EmptyField { field });
    }
    Ok(value)
}

fn require_positive(field: &'static str, value: f64) -> GiftResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GiftError::InvalidWeight { field, value });
    }
    Ok(value)
}

fn require_sugar(sugar_weight: f64, weight: f64) -> GiftResult<f64> {
    if !sugar_weight.is_finite() || sugar_weight < 0.0 {
        return Err(GiftError::InvalidWeight {
            field: "sugar_weight",
            value: sugar_weight,
        });
    }
    if sugar_weight > weight {
        return Err(GiftError::SugarExceedsWeight {
            sugar: sugar_weight,
            weight,
        });
    }
    Ok(sugar_weight)
}

fn require_price(price: Decimal) -> GiftResult<Decimal> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(GiftError::NegativePrice { price });
    }
    Ok(price)
}
