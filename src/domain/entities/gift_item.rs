//! GiftItem entity - one line of a gift: a sweet and how many of it

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Sweet;

/// A (sweet, count) pair with an identity inside its gift
///
/// The id is `None` until the editor mints one on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    sweet: Sweet,
    count: u32,
}

impl GiftItem {
    /// Create a new item without an id
    pub fn new(sweet: Sweet, count: u32) -> Self {
        Self {
            id: None,
            sweet,
            count,
        }
    }

    /// Set the id (used when addressing an existing item for update)
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<u32> {
        self.id
    }

    pub fn sweet(&self) -> &Sweet {
        &self.sweet
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub(crate) fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }

    /// Increase the count, returning `false` (unchanged) on overflow
    pub(crate) fn merge_count(&mut self, extra: u32) -> bool {
        match self.count.checked_add(extra) {
            Some(count) => {
                self.count = count;
                true
            }
            None => false,
        }
    }

    /// Weight of this line: count × sweet weight
    pub fn line_weight(&self) -> f64 {
        f64::from(self.count) * self.sweet.weight()
    }

    /// Price of this line: count × sweet price, `None` on overflow
    pub fn line_price(&self) -> Option<Decimal> {
        Decimal::from(self.count).checked_mul(self.sweet.price())
    }
}
