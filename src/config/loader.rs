use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/typeslides/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("typeslides").join("config.toml")
    }

    /// Default log file location, used when `logging.file` is unset.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        cache_dir.join("typeslides").join("typeslides.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - A default deck is named
    /// - Tick, frame and score intervals are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_deck.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "default_deck must not be empty".to_string(),
            });
        }

        let intervals = [
            ("ui.tick_rate_ms", self.ui.tick_rate_ms),
            ("timing.frame_interval_ms", self.timing.frame_interval_ms),
            ("timing.score_duration_ms", self.timing.score_duration_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("{} must be greater than zero", name),
            });
        }

        Ok(())
    }
}
