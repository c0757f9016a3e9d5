//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::GiftEditorService;
use crate::domain::policies::{GiftItemPolicy, SugarRangePolicy, DEFAULT_MAX_ITEM_COUNT};
use crate::domain::value_objects::SweetsOrderRule;
use crate::error::GiftResult;

use super::loader::{self, ConfigWarning};

/// Limits applied by the default validation policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_max_item_count")]
    pub max_item_count: u32,

    /// Highest sugar weight a filter range may reach, in grams
    #[serde(default)]
    pub max_sugar_weight: Option<f64>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_item_count: default_max_item_count(),
            max_sugar_weight: None,
        }
    }
}

fn default_max_item_count() -> u32 {
    DEFAULT_MAX_ITEM_COUNT
}

/// How gifts are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Decimal places shown for prices
    #[serde(default = "default_price_precision")]
    pub price_precision: u32,

    /// Rule used by `order` when none is given
    #[serde(default)]
    pub default_order: SweetsOrderRule,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            price_precision: default_price_precision(),
            default_order: SweetsOrderRule::default(),
        }
    }
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_price_precision() -> u32 {
    2
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Verbosity for a `-v` count; zero keeps `self`
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GiftResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GiftResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, or the first config found, or defaults;
    /// environment overrides are applied last
    pub fn discover(explicit: Option<&Path>) -> GiftResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (GIFTBOX_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn sugar_range_policy(&self) -> SugarRangePolicy {
        SugarRangePolicy::new().with_max_sugar_weight(self.validation.max_sugar_weight)
    }

    pub fn gift_item_policy(&self) -> GiftItemPolicy {
        GiftItemPolicy::new().with_max_item_count(self.validation.max_item_count)
    }

    /// Editor wired with the configured policies
    pub fn editor(&self) -> GiftEditorService<SugarRangePolicy, GiftItemPolicy> {
        GiftEditorService::new(self.sugar_range_policy(), self.gift_item_policy())
    }
}
