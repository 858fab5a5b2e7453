//! Logging setup
//!
//! Installs a `tracing_subscriber` fmt subscriber for embedding applications.
//! The library itself only emits `tracing` events.

use crate::config::LogConfig;
use tracing_subscriber::filter::LevelFilter;

/// Parse a configured level name.
pub fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&level) {
        anyhow::bail!(
            "Invalid log level '{}'. Must be one of: {}",
            level,
            valid_levels.join(", ")
        );
    }
    Ok(level.parse::<LevelFilter>()?)
}

/// Install the global subscriber.
///
/// Fails on an invalid level or if a global subscriber is already set.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let level = parse_level(&config.level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_levels() {
        assert_eq!(parse_level("trace").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("error").unwrap(), LevelFilter::ERROR);
    }

    #[test]
    fn test_invalid_level_is_rejected_before_install() {
        let config = LogConfig {
            level: "verbose".to_string(),
            ansi: false,
        };
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'verbose'"));
    }
}
