//! SugarRange value object - an inclusive band of sugar weights in grams
//!
//! Construction does not check the bounds; a `Validator<SugarRange>` does
//! that before the editor filters with it.

use serde::{Deserialize, Serialize};

/// Inclusive sugar weight range `[min_weight, max_weight]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SugarRange {
    pub min_weight: f64,
    pub max_weight: f64,
}

impl SugarRange {
    pub fn new(min_weight: f64, max_weight: f64) -> Self {
        Self {
            min_weight,
            max_weight,
        }
    }

    /// Returns true if `sugar_weight` lies within the range, both ends included
    pub fn contains(&self, sugar_weight: f64) -> bool {
        sugar_weight >= self.min_weight && sugar_weight <= self.max_weight
    }
}

impl std::fmt::Display for SugarRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={} g", self.min_weight, self.max_weight)
    }
}
