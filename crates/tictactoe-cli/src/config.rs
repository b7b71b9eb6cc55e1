//! Configuration file loading.
//!
//! Settings come from an optional TOML file; anything missing falls back to
//! the defaults below. Command-line flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured board size is not positive.
    #[error("Invalid board size: {0} (must be positive)")]
    InvalidSize(i32),
}

/// Game settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the board. Defaults to 3.
    #[serde(default = "default_size")]
    pub size: i32,
    /// Default log filter when `RUST_LOG` is unset. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_size() -> i32 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: default_size(),
            log_level: default_log_level(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration from `path`, or from [`Self::config_path()`]
    /// when no path is given.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidSize`] if the size is not positive.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration file path.
    ///
    /// Currently `tictactoe.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("tictactoe.toml")
    }

    /// Checks that the settings describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if the size is zero or negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        Ok(())
    }
}
