//! Configuration Module
//!
//! This module defines the configuration structures for transfer building.
//! Configuration is loaded from TOML files and parsed using serde. Every
//! section and field is optional and falls back to its default.

use crate::{sdk::DEFAULT_DEADLINE, validation::AmountPolicy};
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [transfer]
/// amount_policy = "strict"
/// deadline = 1440
///
/// [log]
/// level = "info"
/// ansi = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transfer: TransferConfig,
    pub log: LogConfig,
}

/// Transfer building configuration
///
/// # Fields
/// - `amount_policy`: How `amount` and `fee` are checked (`"strict"` or `"legacy"`)
/// - `deadline`: Transaction deadline in minutes, passed to the SDK
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub amount_policy: AmountPolicy,
    pub deadline: u16,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            amount_policy: AmountPolicy::default(),
            deadline: DEFAULT_DEADLINE,
        }
    }
}

/// Logging configuration
///
/// # Fields
/// - `level`: Maximum level: trace, debug, info, warn or error
/// - `ansi`: Colorize output
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
