//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no game logic, making them usable in any context
//! (engine, session layer, snapshots, the autoplay runner).
//!
//! # Coordinates
//!
//! - **x**: column, 0-indexed, increasing to the right
//! - **y**: row, 0-indexed, increasing downward (row 0 is the top, where refills enter)
//!
//! # Reference Values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_WIDTH` | 10 | Columns |
//! | `DEFAULT_GRID_HEIGHT` | 10 | Rows |
//! | `DEFAULT_SYMBOL_COUNT` | 6 | Size of the symbol alphabet |
//! | `DEFAULT_MIN_RUN_LENGTH` | 3 | Shortest run that counts as a match |
//! | `DEFAULT_POINTS_PER_SYMBOL` | 40 | Score per matched symbol |
//! | `DEFAULT_MOVE_LIMIT` | 20 | Moves in limited-moves mode |
//!
//! These are defaults only; the engine reads its dimensions from a config value.
//!
//! # Examples
//!
//! ```
//! use match3_types::{Direction, Point, Symbol};
//!
//! let p = Point::new(2, 3);
//! assert_eq!(p.step(Direction::Horizontal, 2), Point::new(4, 3));
//! assert!(p.is_adjacent(Point::new(2, 4)));
//! assert!(!p.is_adjacent(Point::new(3, 4)));
//!
//! assert_eq!(Symbol::new(4).index(), 4);
//! assert_eq!(Symbol::new(0).letter(), 'A');
//! ```

use serde::{Deserialize, Serialize};

/// Grid width in cells (10 columns)
pub const DEFAULT_GRID_WIDTH: u8 = 10;

/// Grid height in cells (10 rows)
pub const DEFAULT_GRID_HEIGHT: u8 = 10;

/// Number of distinct symbol kinds
pub const DEFAULT_SYMBOL_COUNT: u8 = 6;

/// Shortest run of identical symbols that counts as a match
pub const DEFAULT_MIN_RUN_LENGTH: u8 = 3;

/// Points awarded per matched symbol
pub const DEFAULT_POINTS_PER_SYMBOL: u32 = 40;

/// Moves available in limited-moves mode
pub const DEFAULT_MOVE_LIMIT: u32 = 20;

/// Longest run length the engine accepts as a configuration value.
///
/// Templates and potential moves are stack-allocated with this capacity.
pub const MAX_RUN_LENGTH: usize = 8;

/// Largest alphabet `Display` can print (one letter per symbol).
pub const MAX_SYMBOL_COUNT: u8 = 26;

/// One tile kind.
///
/// Symbols are opaque ids; glyphs and colors belong to whoever draws them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(u8);

impl Symbol {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Letter used by plain-text dumps (`A` for symbol 0).
    pub fn letter(self) -> char {
        (b'A' + self.0 % MAX_SYMBOL_COUNT) as char
    }
}

/// A cell on the grid
///
/// - `None`: Empty (vacated by a clear, waiting for gravity/refill)
/// - `Some(Symbol)`: a tile
///
/// `None` never survives a finished cascade.
pub type Cell = Option<Symbol>;

/// Grid coordinate (column `x`, row `y`).
///
/// Signed so that neighbours of edge cells can be expressed; the grid decides
/// whether a point is inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move `n` cells along `direction`.
    pub fn step(self, direction: Direction, n: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx * n, dy * n)
    }

    /// 4-connected neighbourhood test (diagonals are not adjacent).
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Axis along which runs are matched. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// +x
    Horizontal,
    /// +y
    Vertical,
}

impl Direction {
    /// Both axes, in scan order.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Unit vector `(dx, dy)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
        }
    }
}
