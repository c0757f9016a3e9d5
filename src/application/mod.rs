//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Wraps every outcome in a `ServiceResponse`
//!
//! ## Services
//!
//! - `GiftEditorService` - Queries and edits the items of a gift

pub mod gift_editor;
pub mod response;

pub use gift_editor::GiftEditorService;
pub use response::{ResponseError, ServiceResponse, GIFT_MISSING, ITEM_MISSING, UNSUPPORTED_RULE};
