//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GiftError, GiftResult};

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
const PROJECT_CONFIG_FILE: &str = "giftbox.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// The line number (1-indexed) if found
    pub line: Option<usize>,
    /// A known key close to the unknown one
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GiftResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GiftError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config, or the first one found, or defaults
///
/// An explicit path must exist and parse. Discovered files that fail to
/// parse are reported as errors too, rather than silently skipped.
pub fn discover(explicit: Option<&Path>) -> GiftResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths().into_iter().find(|path| path.exists()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("giftbox").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (GIFTBOX_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any variable source
pub(super) fn apply_overrides(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> Config {
    // GIFTBOX_MAX_ITEM_COUNT
    if let Some(count) = var("GIFTBOX_MAX_ITEM_COUNT").and_then(|v| v.trim().parse().ok()) {
        config.validation.max_item_count = count;
    }

    // GIFTBOX_MAX_SUGAR_WEIGHT
    if let Some(max) = var("GIFTBOX_MAX_SUGAR_WEIGHT").and_then(|v| v.trim().parse().ok()) {
        config.validation.max_sugar_weight = Some(max);
    }

    // GIFTBOX_CURRENCY
    if let Some(currency) = var("GIFTBOX_CURRENCY").filter(|v| !v.trim().is_empty()) {
        config.display.currency = currency.trim().to_string();
    }

    // GIFTBOX_DEFAULT_ORDER (unknown values are ignored)
    if let Some(rule) = var("GIFTBOX_DEFAULT_ORDER").and_then(|v| v.parse().ok()) {
        config.display.default_order = rule;
    }

    // GIFTBOX_VERBOSITY
    if let Some(verbosity) = var("GIFTBOX_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "validation",
        "max_item_count",
        "max_sugar_weight",
        "display",
        "currency",
        "price_precision",
        "default_order",
        "output",
        "verbosity",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
