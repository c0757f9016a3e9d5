//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod sugar_range;
mod sweets_order_rule;

pub use sugar_range::SugarRange;
pub use sweets_order_rule::SweetsOrderRule;
