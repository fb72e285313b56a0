//! Session layer - a playable round on top of the grid engine
//!
//! The grid engine answers rule questions; this crate keeps the state a real
//! game needs between those questions: score, move count, game mode, whether
//! a hint was shown this turn, and what to do when the grid goes dead.
//!
//! # Example
//!
//! ```
//! use match3_game::{GameMode, Phase, Session};
//! use match3_game::core::{Engine, SimpleRng};
//!
//! let mut session = Session::new(Engine::default(), GameMode::limited(), SimpleRng::new(1));
//!
//! let hint = session.engine().find_potential_move(session.grid()).unwrap();
//! assert_eq!(session.swap(hint.swap.0, hint.swap.1), Ok(true));
//!
//! // Animate with tick(), or jump to the end with skip().
//! session.skip();
//! assert_eq!(session.phase(), Phase::AwaitingMove);
//! assert_eq!(session.remaining_moves(), Some(19));
//! assert!(session.score() >= 120);
//! ```

pub mod session;

pub use match3_core as core;
pub use match3_types as types;

pub use session::{GameMode, GameOverReason, Phase, Session, SessionError, SessionSnapshot};
