//! Sweet ordering
//!
//! Five total orders over `Sweet`, one per `SweetsOrderRule`, and a stable
//! sort of gift items by one of them. Items that compare equal keep their
//! relative input order.

use std::cmp::Ordering;

use crate::domain::entities::{GiftItem, Sweet};
use crate::domain::value_objects::SweetsOrderRule;

/// A total order over sweets
pub type SweetComparator = fn(&Sweet, &Sweet) -> Ordering;

/// Lexicographic by name
pub fn by_name(a: &Sweet, b: &Sweet) -> Ordering {
    a.name().cmp(b.name())
}

/// Lexicographic by manufacturer
pub fn by_manufacturer(a: &Sweet, b: &Sweet) -> Ordering {
    a.manufacturer().cmp(b.manufacturer())
}

/// Ascending by price
pub fn by_price(a: &Sweet, b: &Sweet) -> Ordering {
    a.price().cmp(&b.price())
}

/// Ascending by weight
pub fn by_weight(a: &Sweet, b: &Sweet) -> Ordering {
    a.weight().total_cmp(&b.weight())
}

/// Ascending by sugar weight
pub fn by_sugar_weight(a: &Sweet, b: &Sweet) -> Ordering {
    a.sugar_weight().total_cmp(&b.sugar_weight())
}

/// Comparator selected by a rule
pub fn comparator_for(rule: SweetsOrderRule) -> SweetComparator {
    match rule {
        SweetsOrderRule::Name => by_name,
        SweetsOrderRule::Manufacturer => by_manufacturer,
        SweetsOrderRule::Price => by_price,
        SweetsOrderRule::Weight => by_weight,
        SweetsOrderRule::SugarWeight => by_sugar_weight,
    }
}

/// Items sorted by their sweets under `rule`, without touching the input
pub fn order_items<'a, I>(items: I, rule: SweetsOrderRule) -> Vec<&'a GiftItem>
where
    I: IntoIterator<Item = &'a GiftItem>,
{
    let compare = comparator_for(rule);
    let mut ordered: Vec<&GiftItem> = items.into_iter().collect();
    // `sort_by` is stable
    ordered.sort_by(|a, b| compare(a.sweet(), b.sweet()));
    ordered
}
