//! Error types for giftbox
//!
//! Uses `thiserror` for library errors. These are construction-time and
//! configuration failures; expected editor failures travel through
//! `ServiceResponse` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for giftbox operations
pub type GiftResult<T> = Result<T, GiftError>;

/// Main error type for giftbox operations
#[derive(Error, Debug)]
pub enum GiftError {
    /// A textual attribute was empty or whitespace only
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A weight was negative, zero where it must be positive, or not finite
    #[error("invalid {field}: {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    /// Sugar content heavier than the sweet itself
    #[error("sugar weight {sugar} g exceeds sweet weight {weight} g")]
    SugarExceedsWeight { sugar: f64, weight: f64 },

    /// Price below zero
    #[error("price must not be negative, got {price}")]
    NegativePrice { price: rust_decimal::Decimal },

    /// Ordering rule name or number not recognised
    #[error("unknown ordering rule '{value}'")]
    UnknownOrderRule { value: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_field() {
        let err = GiftError::EmptyField { field: "flavor" };
        assert_eq!(err.to_string(), "flavor must not be empty");
    }

    #[test]
    fn test_error_display_sugar_exceeds_weight() {
        let err = GiftError::SugarExceedsWeight {
            sugar: 12.5,
            weight: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "sugar weight 12.5 g exceeds sweet weight 10 g"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = GiftError::InvalidConfig {
            file: PathBuf::from("giftbox.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in giftbox.toml: expected a table"
        );
    }
}
