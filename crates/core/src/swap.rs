//! Swap evaluator
//!
//! Tries a swap on a copy of the grid and keeps it only if it creates a match.
//! The input grid is never touched, so "try, then maybe cancel" needs no undo.

use crate::grid::Grid;
use crate::matcher::find_matches;
use crate::types::Point;

/// Result of [`try_swap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// The swap produced at least one match.
    pub accepted: bool,
    /// The swapped grid when accepted, otherwise an unmodified copy of the input.
    pub grid: Grid,
}

/// Evaluate swapping `a` and `b`.
///
/// Both points must be on the grid (panics otherwise). Adjacency is the caller's
/// responsibility; see [`Point::is_adjacent`].
pub fn try_swap(grid: &Grid, a: Point, b: Point, min_run_length: usize) -> SwapOutcome {
    assert!(
        grid.contains(a) && grid.contains(b),
        "swap ({}, {}) <-> ({}, {}) is outside the {}x{} grid",
        a.x,
        a.y,
        b.x,
        b.y,
        grid.width(),
        grid.height()
    );

    let mut swapped = grid.clone();
    swapped.swap(a, b);

    if find_matches(&swapped, min_run_length).is_empty() {
        SwapOutcome {
            accepted: false,
            grid: grid.clone(),
        }
    } else {
        SwapOutcome {
            accepted: true,
            grid: swapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_swap() {
        let grid = Grid::from_rows(&[[1, 5, 5, 2], [5, 3, 4, 0]]);
        let outcome = try_swap(&grid, Point::new(0, 1), Point::new(0, 0), 3);
        assert!(outcome.accepted);
        assert_eq!(outcome.grid, Grid::from_rows(&[[5, 5, 5, 2], [1, 3, 4, 0]]));
        // Input left alone.
        assert_eq!(grid, Grid::from_rows(&[[1, 5, 5, 2], [5, 3, 4, 0]]));
    }

    #[test]
    fn test_rejected_swap_returns_original() {
        let grid = Grid::from_rows(&[[1, 5, 5, 2], [5, 3, 4, 0]]);
        let outcome = try_swap(&grid, Point::new(2, 0), Point::new(3, 0), 3);
        assert!(!outcome.accepted);
        assert_eq!(outcome.grid, grid);
    }

    #[test]
    fn test_swapping_equal_symbols_on_matchless_grid_is_rejected() {
        let grid = Grid::from_rows(&[[1, 1, 2], [2, 3, 1]]);
        let outcome = try_swap(&grid, Point::new(0, 0), Point::new(1, 0), 3);
        assert!(!outcome.accepted);
        assert_eq!(outcome.grid, grid);
    }

    #[test]
    #[should_panic(expected = "outside the 4x2 grid")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::from_rows(&[[1, 5, 5, 2], [5, 3, 4, 0]]);
        try_swap(&grid, Point::new(3, 1), Point::new(4, 1), 3);
    }
}
