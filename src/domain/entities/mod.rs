//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Sweet` - a piece of confectionery (plain, lollipop, chocolate)
//! - `GiftItem` - a sweet and its count, identified within a gift
//! - `Gift` - the ordered box of gift items

mod gift;
mod gift_item;
mod sweet;

pub use gift::Gift;
pub use gift_item::GiftItem;
pub use sweet::{Sweet, SweetKind};
