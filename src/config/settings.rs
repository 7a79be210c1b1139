//! Application settings loading from config.toml
//!
//! Every key is optional. A missing file yields the defaults, while a file that
//! exists but cannot be parsed is reported as a configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "EVENT_DESK_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Whether a new session starts with the sample records
    pub seed_sample_data: bool,
    /// Symbol prefixed to every formatted amount
    pub currency_symbol: String,
    /// Mocked search behaviour
    pub search: SearchConfig,
    /// Decor record behaviour
    pub decor: DecorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            currency_symbol: "$".to_string(),
            search: SearchConfig::default(),
            decor: DecorConfig::default(),
        }
    }
}

/// Settings for the artificial search delay
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Milliseconds a search waits before resolving
    pub delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl SearchConfig {
    /// The configured delay as a [`Duration`].
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Settings for decor records
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DecorConfig {
    /// What happens to `received_amount` when a record is edited
    pub received_amount_policy: ReceivedAmountPolicy,
}

/// Staleness policy for the cached `received_amount` of a decor record.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReceivedAmountPolicy {
    /// Keep the value derived at creation time, whatever later edits do
    #[default]
    Frozen,
    /// Re-derive the value from the edited amounts and percentage
    Recompute,
}

/// Resolves the config file path from `EVENT_DESK_CONFIG`, falling back to
/// `./config.toml`.
#[must_use]
pub fn get_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads the configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A key holds a value of the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] when the text is not valid for [`AppConfig`].
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the configuration from [`get_config_path`], using defaults when the
/// file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = get_config_path();
    if !path.exists() {
        info!(
            "No configuration file at {}, using defaults.",
            path.display()
        );
        return Ok(AppConfig::default());
    }
    let config = load_config(&path)?;
    info!("Loaded configuration from {}.", path.display());
    Ok(config)
}
