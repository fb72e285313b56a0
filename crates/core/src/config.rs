//! Engine configuration
//!
//! Grid dimensions, alphabet size, run length and scoring are carried by a value
//! passed to [`Engine::new`](crate::Engine::new) instead of living in globals, so
//! tests can run the same rules on small or oddly shaped grids.

use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_MIN_RUN_LENGTH, DEFAULT_POINTS_PER_SYMBOL,
    DEFAULT_SYMBOL_COUNT, MAX_RUN_LENGTH, MAX_SYMBOL_COUNT,
};

/// Immutable rules for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u8,
    pub height: u8,
    pub symbol_count: u8,
    pub min_run_length: u8,
    pub points_per_symbol: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            symbol_count: DEFAULT_SYMBOL_COUNT,
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            points_per_symbol: DEFAULT_POINTS_PER_SYMBOL,
        }
    }
}

/// Reasons a [`GridConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_run_length must be between 3 and {max}, got {got}")]
    RunLength { got: u8, max: usize },

    #[error("grid {width}x{height} cannot hold a run of {min_run_length}")]
    GridTooSmall {
        width: u8,
        height: u8,
        min_run_length: u8,
    },

    #[error("symbol_count must be between 2 and {max}, got {got}")]
    SymbolCount { got: u8, max: u8 },
}

impl GridConfig {
    /// Check the invariants the engine relies on.
    ///
    /// - runs of at least 3, at most [`MAX_RUN_LENGTH`]
    /// - both axes at least one run long, so every template fits somewhere
    /// - at least 2 symbols, otherwise no match-free grid exists and
    ///   generation would never settle
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_run_length < 3 || self.min_run_length as usize > MAX_RUN_LENGTH {
            return Err(ConfigError::RunLength {
                got: self.min_run_length,
                max: MAX_RUN_LENGTH,
            });
        }
        if self.width < self.min_run_length || self.height < self.min_run_length {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min_run_length: self.min_run_length,
            });
        }
        if self.symbol_count < 2 || self.symbol_count > MAX_SYMBOL_COUNT {
            return Err(ConfigError::SymbolCount {
                got: self.symbol_count,
                max: MAX_SYMBOL_COUNT,
            });
        }
        Ok(())
    }

    /// Number of cells on the grid.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
