//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! The binary wires these to a `GiftEditorService` built from `Config`.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{create_renderer, GiftRenderer, GiftStats, OutputFormat};
