//! Gift Item Policy
//!
//! Rules a gift item must satisfy before the editor inserts or replaces it.
//! Sweet attributes are already checked when the sweet is built; this policy
//! covers the line itself.

use crate::domain::entities::GiftItem;
use crate::domain::ports::{ValidationResult, Validator};

/// Largest count a single gift line may carry unless configured otherwise
pub const DEFAULT_MAX_ITEM_COUNT: u32 = 1000;

/// Default validator for `GiftItem`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiftItemPolicy {
    max_item_count: u32,
}

impl Default for GiftItemPolicy {
    fn default() -> Self {
        Self {
            max_item_count: DEFAULT_MAX_ITEM_COUNT,
        }
    }
}

impl GiftItemPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_item_count(mut self, max_item_count: u32) -> Self {
        self.max_item_count = max_item_count;
        self
    }

    pub fn max_item_count(&self) -> u32 {
        self.max_item_count
    }
}

impl Validator<GiftItem> for GiftItemPolicy {
    fn validate(&self, item: &GiftItem) -> ValidationResult {
        if item.count() == 0 {
            return ValidationResult::error("gift item count must be positive");
        }

        if item.count() > self.max_item_count {
            return ValidationResult::error(format!(
                "gift item count must not exceed {}",
                self.max_item_count
            ));
        }

        ValidationResult::ok()
    }
}
