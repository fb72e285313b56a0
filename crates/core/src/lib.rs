//! Grid engine - pure, deterministic, and testable
//!
//! This crate contains every rule of the match-3 game: what counts as a match,
//! how matches cascade, whether a swap is legal, whether any move remains, and
//! how score accrues. It has no dependencies on rendering, input, or timing:
//!
//! - **Deterministic**: randomness only enters through a caller-owned [`RandomSource`]
//! - **Synchronous**: every call is O(grid size) and returns; pacing belongs to the caller
//! - **Value-owned**: grids are passed in and handed back, never retained
//!
//! # Module Structure
//!
//! - [`config`]: grid dimensions, alphabet size, run length, points per symbol
//! - [`grid`]: the symbol matrix
//! - [`matcher`]: maximal-run detection with overlap removal
//! - [`potential`]: template-based potential-move (hint) search
//! - [`cascade`]: clear / gravity / refill state machine
//! - [`swap`]: tentative swap evaluation
//! - [`scoring`]: points for cleared matches
//! - [`rng`]: the random-source seam
//! - [`engine`]: [`Engine`], tying the above to one configuration
//!
//! # Example
//!
//! ```
//! use match3_core::{Engine, SimpleRng};
//!
//! let engine = Engine::default();
//! let mut rng = SimpleRng::new(12345);
//!
//! // Fresh grid: no matches, at least one legal move.
//! let mut grid = engine.new_grid_with_no_matches(&mut rng);
//! engine.ensure_potential_move(&mut grid, &mut rng);
//! assert!(engine.find_matches(&grid).is_empty());
//!
//! // Take the hint and resolve the cascade all at once.
//! let hint = engine.find_potential_move(&grid).unwrap();
//! let outcome = engine.try_swap(&grid, hint.swap.0, hint.swap.1);
//! assert!(outcome.accepted);
//!
//! let mut grid = outcome.grid;
//! let mut score = 0;
//! engine.resolve_cascade(&mut grid, &mut rng, Some(&mut score));
//! assert!(score >= 120);
//! assert!(engine.find_matches(&grid).is_empty());
//! ```

pub mod cascade;
pub mod config;
pub mod engine;
pub mod grid;
pub mod matcher;
pub mod potential;
pub mod rng;
pub mod scoring;
pub mod swap;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use cascade::{CascadeStep, CascadeSummary};
pub use config::{ConfigError, GridConfig};
pub use engine::Engine;
pub use grid::Grid;
pub use matcher::Match;
pub use potential::PotentialMove;
pub use rng::{RandAdapter, RandomSource, SimpleRng};
pub use swap::SwapOutcome;
