//! Match finder
//!
//! Reports every maximal run of at least `min_run_length` identical symbols along
//! either axis.
//!
//! Every cell is tried as a run origin and the run is walked forward along the
//! axis, so the same run is first seen at its start and then again as each of its
//! suffixes. Candidates are folded into the result with a subsumption rule:
//! a candidate contained in an accepted match is dropped, accepted matches
//! contained in the candidate are replaced by it. What remains is the unique
//! set of maximal runs, whatever order the scan visits them in.
//!
//! A horizontal and a vertical run that cross stay two separate matches.

use crate::grid::Grid;
use crate::types::{Direction, Point, Symbol};

/// A contiguous run of one symbol along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub symbol: Symbol,
    /// First cell of the run (leftmost or topmost).
    pub origin: Point,
    pub direction: Direction,
    pub length: usize,
}

impl Match {
    /// Cells of the run, from the origin forward.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.length as i32).map(move |i| self.origin.step(self.direction, i))
    }

    /// Last cell of the run.
    pub fn end(&self) -> Point {
        self.origin.step(self.direction, self.length as i32 - 1)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        let (start, end) = (self.origin, self.end());
        match self.direction {
            Direction::Horizontal => p.y == start.y && p.x >= start.x && p.x <= end.x,
            Direction::Vertical => p.x == start.x && p.y >= start.y && p.y <= end.y,
        }
    }

    /// Point-set containment (`self ⊆ other`).
    ///
    /// Runs on different axes share at most one cell, so with runs of two or more
    /// cells containment only happens along the same line.
    pub fn is_subset_of(&self, other: &Match) -> bool {
        if self.length > 1 && self.direction != other.direction {
            return false;
        }
        other.contains_point(self.origin) && other.contains_point(self.end())
    }
}

/// Find all maximal runs of at least `min_run_length` cells.
///
/// Returns an empty vector when nothing matches. Empty cells never take part.
pub fn find_matches(grid: &Grid, min_run_length: usize) -> Vec<Match> {
    let mut matches: Vec<Match> = Vec::new();

    for direction in Direction::ALL {
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let origin = Point::new(x, y);
                if let Some(candidate) = run_from(grid, origin, direction, min_run_length) {
                    accept(&mut matches, candidate);
                }
            }
        }
    }

    matches
}

/// Walk forward from `origin` and return the run if it is long enough.
fn run_from(
    grid: &Grid,
    origin: Point,
    direction: Direction,
    min_run_length: usize,
) -> Option<Match> {
    let symbol = grid.cell(origin)?;

    let mut length = 1usize;
    while grid.get(origin.step(direction, length as i32)) == Some(Some(symbol)) {
        length += 1;
    }

    (length >= min_run_length).then_some(Match {
        symbol,
        origin,
        direction,
        length,
    })
}

/// Fold `candidate` into `matches` under the subsumption rule.
fn accept(matches: &mut Vec<Match>, candidate: Match) {
    if matches.iter().any(|m| candidate.is_subset_of(m)) {
        return;
    }
    matches.retain(|m| !m.is_subset_of(&candidate));
    matches.push(candidate);
}
