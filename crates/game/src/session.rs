//! Session module - one round of play on top of the grid engine
//!
//! A session owns the grid, the RNG, the score and the move counter, and walks
//! through three phases:
//!
//! ```text
//! AwaitingMove --swap accepted--> Cascading --settled--> AwaitingMove
//!       |                             |
//!       +---------- end() ------------+--------> GameOver
//! ```
//!
//! Hint policy: once a hint has been shown in a turn, that turn scores nothing,
//! neither the player's own match nor the cascades it sets off. The flag clears
//! when the cascade settles.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{CascadeStep, Engine, Grid, PotentialMove, RandomSource};
use crate::types::{Point, DEFAULT_MOVE_LIMIT};

/// How a round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameMode {
    /// Play until the player quits.
    Endless,
    /// The round ends after `limit` accepted swaps.
    LimitedMoves { limit: u32 },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Endless
    }
}

impl GameMode {
    pub fn limited() -> Self {
        GameMode::LimitedMoves {
            limit: DEFAULT_MOVE_LIMIT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Endless => "endless",
            GameMode::LimitedMoves { .. } => "limited_moves",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    OutOfMoves,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingMove,
    Cascading,
    GameOver(GameOverReason),
}

/// Rejected session calls. The engine itself never fails; these guard the
/// session's own state machine and the adjacency rule the engine leaves to
/// its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot swap while {0:?}")]
    WrongPhase(Phase),

    #[error("point ({}, {}) is outside the grid", .0.x, .0.y)]
    OutOfBounds(Point),

    #[error("points ({}, {}) and ({}, {}) are not adjacent", .0.x, .0.y, .1.x, .1.y)]
    NotAdjacent(Point, Point),

    #[error("grid is {got_width}x{got_height}, expected {width}x{height}")]
    GridSize {
        width: u8,
        height: u8,
        got_width: u8,
        got_height: u8,
    },

    #[error("grid has Empty cells or unresolved matches")]
    UnstableGrid,
}

/// One round of play.
#[derive(Debug, Clone)]
pub struct Session<R> {
    engine: Engine,
    grid: Grid,
    rng: R,
    mode: GameMode,
    phase: Phase,
    score: u32,
    moves: u32,
    hint_shown: bool,
    /// Cascade steps taken in the current turn.
    turn_steps: u32,
    /// Dead grids replaced during play.
    regenerations: u32,
}

impl<R: RandomSource> Session<R> {
    /// Start a round: a match-free grid with at least one legal move, no score.
    ///
    /// A move limit of 0 starts the round already over.
    pub fn new(engine: Engine, mode: GameMode, mut rng: R) -> Self {
        let mut grid = engine.new_grid_with_no_matches(&mut rng);
        engine.ensure_potential_move(&mut grid, &mut rng);

        let phase = if mode == (GameMode::LimitedMoves { limit: 0 }) {
            Phase::GameOver(GameOverReason::OutOfMoves)
        } else {
            Phase::AwaitingMove
        };

        Self {
            engine,
            grid,
            rng,
            mode,
            phase,
            score: 0,
            moves: 0,
            hint_shown: false,
            turn_steps: 0,
            regenerations: 0,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Accepted swaps so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    pub fn regenerations(&self) -> u32 {
        self.regenerations
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Moves left in limited mode; `None` in endless mode.
    pub fn remaining_moves(&self) -> Option<u32> {
        match self.mode {
            GameMode::Endless => None,
            GameMode::LimitedMoves { limit } => Some(limit.saturating_sub(self.moves)),
        }
    }

    /// Show a hint. Marks the current turn as unscored.
    pub fn hint(&mut self) -> Option<PotentialMove> {
        if self.phase != Phase::AwaitingMove {
            return None;
        }
        let hint = self.engine.find_potential_move(&self.grid);
        if hint.is_some() {
            self.hint_shown = true;
        }
        hint
    }

    /// Try to swap `a` and `b`.
    ///
    /// `Ok(true)` when the swap made a match (the cascade starts, one move is
    /// used), `Ok(false)` when it did not (nothing changes).
    pub fn swap(&mut self, a: Point, b: Point) -> Result<bool, SessionError> {
        if self.phase != Phase::AwaitingMove {
            return Err(SessionError::WrongPhase(self.phase));
        }
        for p in [a, b] {
            if !self.grid.contains(p) {
                return Err(SessionError::OutOfBounds(p));
            }
        }
        if !a.is_adjacent(b) {
            return Err(SessionError::NotAdjacent(a, b));
        }

        let outcome = self.engine.try_swap(&self.grid, a, b);
        if !outcome.accepted {
            return Ok(false);
        }

        self.grid = outcome.grid;
        self.moves += 1;
        self.turn_steps = 0;
        self.set_phase(Phase::Cascading);
        Ok(true)
    }

    /// Advance the cascade by one step; `None` outside the cascading phase.
    pub fn tick(&mut self) -> Option<CascadeStep> {
        if self.phase != Phase::Cascading {
            return None;
        }

        let score = if self.hint_shown {
            None
        } else {
            Some(&mut self.score)
        };
        let step = self.engine.step_cascade(&mut self.grid, &mut self.rng, score);
        self.turn_steps += 1;

        if step.is_finished() {
            self.settle();
        }
        Some(step)
    }

    /// Finish the running cascade at once. Returns the number of steps taken.
    pub fn skip(&mut self) -> u32 {
        let mut steps = 0;
        while self.tick().is_some() {
            steps += 1;
        }
        steps
    }

    /// End the round early.
    pub fn end(&mut self) {
        if !self.is_over() {
            self.set_phase(Phase::GameOver(GameOverReason::Quit));
        }
    }

    fn settle(&mut self) {
        debug!(
            "turn {} settled after {} cascade steps (scored: {})",
            self.moves, self.turn_steps, !self.hint_shown
        );
        self.hint_shown = false;

        if self.remaining_moves() == Some(0) {
            self.set_phase(Phase::GameOver(GameOverReason::OutOfMoves));
            return;
        }

        if self.engine.find_potential_move(&self.grid).is_none() {
            // Dead grids are replaced rather than ending the round.
            let replaced = self.engine.ensure_potential_move(&mut self.grid, &mut self.rng);
            self.regenerations += replaced;
        }
        self.set_phase(Phase::AwaitingMove);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self
                .grid
                .rows()
                .map(|row| row.iter().map(|c| c.map(|s| s.index())).collect())
                .collect(),
            mode: self.mode,
            phase: self.phase,
            score: self.score,
            moves: self.moves,
            remaining_moves: self.remaining_moves(),
            hint_shown: self.hint_shown,
            regenerations: self.regenerations,
        }
    }

    /// Replace the grid, e.g. to restore a saved position. Only allowed between moves.
    ///
    /// The grid must have the engine's dimensions, no Empty cells and no matches.
    /// A dead grid is accepted but replaced right away, as after a cascade.
    pub fn set_grid(&mut self, grid: Grid) -> Result<(), SessionError> {
        if self.phase != Phase::AwaitingMove {
            return Err(SessionError::WrongPhase(self.phase));
        }
        let config = self.engine.config();
        if (grid.width(), grid.height()) != (config.width, config.height) {
            return Err(SessionError::GridSize {
                width: config.width,
                height: config.height,
                got_width: grid.width(),
                got_height: grid.height(),
            });
        }
        if grid.has_empty() || !self.engine.find_matches(&grid).is_empty() {
            return Err(SessionError::UnstableGrid);
        }

        self.grid = grid;
        let replaced = self.engine.ensure_potential_move(&mut self.grid, &mut self.rng);
        self.regenerations += replaced;
        Ok(())
    }
}

/// Plain-data view of a session for logs and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Rows top to bottom; `null` marks Empty.
    pub grid: Vec<Vec<Option<u8>>>,
    pub mode: GameMode,
    pub phase: Phase,
    pub score: u32,
    pub moves: u32,
    pub remaining_moves: Option<u32>,
    pub hint_shown: bool,
    pub regenerations: u32,
}
