//! Application configuration, loadable from TOML.
//!
//! ```toml
//! [grid]
//! width = 8
//! height = 8
//! symbol_count = 5
//!
//! [game]
//! seed = 42
//! mode = { type = "limited_moves", limit = 15 }
//! ```
//!
//! Every key is optional; missing keys fall back to the reference rules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GridConfig};
use crate::game::GameMode;

/// Session-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: GameMode,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub game: SessionConfig,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),

    #[error("move limit must be > 0")]
    ZeroMoveLimit,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LoadConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, LoadConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LoadConfigError> {
        self.grid.validate()?;
        if self.game.mode == (GameMode::LimitedMoves { limit: 0 }) {
            return Err(LoadConfigError::ZeroMoveLimit);
        }
        Ok(())
    }
}
