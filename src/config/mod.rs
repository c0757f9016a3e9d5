//! Configuration module for giftbox
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GIFTBOX_*)
//! 3. Explicit `--config` file, else `./giftbox.toml`
//! 4. User config (`<config dir>/giftbox/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, DisplayConfig, OutputConfig, ValidationConfig, Verbosity};
