//! Common test utilities for giftbox CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and config directories plus a CLI runner
//! - Fixtures: reusable gift and item documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
