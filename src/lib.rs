//! Giftbox - editor for gifts assembled from sweets
//!
//! A gift is an ordered list of items, each pairing a sweet with a count.
//! The [`GiftEditorService`] answers queries over a gift (lookup, sugar
//! filtering, ordering, aggregates) and edits it in place (add with merge,
//! update, delete), returning a [`ServiceResponse`] instead of panicking on
//! expected failures.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{GiftEditorService, ResponseError, ServiceResponse};
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::entities::{Gift, GiftItem, Sweet, SweetKind};
pub use domain::policies::{GiftItemPolicy, SugarRangePolicy};
pub use domain::ports::{ValidationResult, Validator};
pub use domain::value_objects::{SugarRange, SweetsOrderRule};
pub use error::{GiftError, GiftResult};
