//! Gift entity - the ordered box of gift items
//!
//! A gift is owned by the caller. The editor mutates its item sequence in
//! place and never copies it.

use serde::{Deserialize, Serialize};

use super::GiftItem;

/// An ordered collection of gift items
///
/// Insertion order is display order. Item ids are unique between editor
/// calls but not necessarily contiguous.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gift {
    #[serde(default)]
    items: Vec<GiftItem>,
}

impl Gift {
    /// Create an empty gift
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gift from already identified items
    pub fn from_items(items: Vec<GiftItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GiftItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<GiftItem> {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GiftItem> {
        self.items.iter()
    }

    /// Next id for a new item: highest current id plus one, or 1
    ///
    /// Gaps left by deleted items are never refilled. `None` once the
    /// highest id is `u32::MAX`.
    pub fn next_item_id(&self) -> Option<u32> {
        match self.items.iter().filter_map(GiftItem::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Position of the item with the given id
    pub fn position_of_id(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }

    /// Position of the item holding the sweet with the given catalog id
    pub fn position_of_sweet(&self, sweet_id: u32) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.sweet().id() == sweet_id)
    }

    /// First item id that appears more than once, if any
    pub fn duplicate_item_id(&self) -> Option<u32> {
        let mut seen = std::collections::HashSet::new();
        self.items
            .iter()
            .filter_map(GiftItem::id)
            .find(|id| !seen.insert(*id))
    }
}

impl<'a> IntoIterator for &'a Gift {
    type Item = &'a GiftItem;
    type IntoIter = std::slice::Iter<'a, GiftItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
