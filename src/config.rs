//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Ask before zeroing the scoreboard.
    #[serde(default = "default_confirm_reset")]
    confirm_reset: bool,

    /// Print the command list when the shell starts.
    #[serde(default = "default_show_help_on_start")]
    show_help_on_start: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_confirm_reset() -> bool {
    true
}

fn default_show_help_on_start() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            confirm_reset: default_confirm_reset(),
            show_help_on_start: default_show_help_on_start(),
            log_filter: default_log_filter(),
        }
    }
}

impl ShellConfig {
    /// Creates a configuration with explicit prompt settings and the default log filter.
    pub fn new(confirm_reset: bool, show_help_on_start: bool) -> Self {
        Self {
            confirm_reset,
            show_help_on_start,
            log_filter: default_log_filter(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(confirm_reset = config.confirm_reset, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ShellConfig = toml::from_str("confirm_reset = false").unwrap();
        assert!(!*config.confirm_reset());
        assert!(*config.show_help_on_start());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
