//! Domain Policies
//!
//! Default business rules for editor inputs. Each policy implements the
//! `Validator` port so it can be handed to `GiftEditorService` directly.

mod gift_item_policy;
mod sugar_range_policy;

pub use gift_item_policy::{GiftItemPolicy, DEFAULT_MAX_ITEM_COUNT};
pub use sugar_range_policy::SugarRangePolicy;
