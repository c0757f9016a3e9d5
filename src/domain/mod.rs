//! Domain Layer
//!
//! The core of giftbox - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Sweet, GiftItem, Gift)
//! - `value_objects/` - Immutable value types (SugarRange, SweetsOrderRule)
//! - `services/` - Domain services (sweet ordering)
//! - `policies/` - Business rules (SugarRangePolicy, GiftItemPolicy)
//! - `ports/` - Interface definitions (Validator)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Validation is injected through the `Validator` port

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
