//! Match-3 (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `match3::{core, game, types}` and adds the pieces only the binary needs:
//! TOML configuration and a stderr logger.

pub mod config;
pub mod logging;

pub use match3_core as core;
pub use match3_game as game;
pub use match3_types as types;
