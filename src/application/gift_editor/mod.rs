//! Gift Editor
//!
//! Queries and edits the items of one caller-owned gift per call:
//! - Lookup by id and listing
//! - Filtering sweets by sugar range
//! - Ordering items by a sweet attribute
//! - Add (merging duplicate sweets), update, delete
//! - Aggregate count, weight and price

mod service;

pub use service::GiftEditorService;
