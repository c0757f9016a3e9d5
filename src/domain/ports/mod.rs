//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Validation is pluggable: the editor is generic over the validators it
//! is given, and `policies` provides the default implementations.

pub mod validator;

pub use validator::{ValidationResult, Validator};
