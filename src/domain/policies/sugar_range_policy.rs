//! Sugar Range Policy
//!
//! Rules a sugar range must satisfy before the editor filters with it.

use crate::domain::ports::{ValidationResult, Validator};
use crate::domain::value_objects::SugarRange;

/// Default validator for `SugarRange`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SugarRangePolicy {
    /// Upper bound any range may reach, in grams
    max_sugar_weight: Option<f64>,
}

impl SugarRangePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject ranges reaching above `max` grams
    pub fn with_max_sugar_weight(mut self, max: Option<f64>) -> Self {
        self.max_sugar_weight = max;
        self
    }
}

impl Validator<SugarRange> for SugarRangePolicy {
    fn validate(&self, range: &SugarRange) -> ValidationResult {
        let bound_ok = |w: f64| w.is_finite() && w >= 0.0;

        require(
            bound_ok(range.min_weight) && bound_ok(range.max_weight),
            "sugar range bounds must be non-negative",
        )
        .and_then(|| {
            require(
                range.min_weight <= range.max_weight,
                "minimum sugar weight must not exceed maximum",
            )
        })
        .and_then(|| match self.max_sugar_weight {
            Some(cap) if range.max_weight > cap => ValidationResult::error(format!(
                "maximum sugar weight must not exceed {} g",
                cap
            )),
            _ => ValidationResult::ok(),
        })
    }
}

fn require(holds: bool, message: &str) -> ValidationResult {
    if holds {
        ValidationResult::ok()
    } else {
        ValidationResult::error(message)
    }
}
