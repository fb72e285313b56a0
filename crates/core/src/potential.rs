//! Potential-move finder
//!
//! Decides whether some single adjacent swap would create a match without trying
//! every swap. A fixed library of templates describes the shapes in which
//! `min_run_length` same-symbol cells are one swap away from a run:
//!
//! ```text
//! odd cell low    odd cell high    gap after first   gap before last
//!  .XX  X.X  XX.   X..  .X.  ..X    X.XX              XX.X
//!  X..  .X.  ..X   .XX  X.X  XX.
//! ```
//!
//! plus the same shapes transposed for vertical runs. Offsets are stored with
//! x to the right and y *upward*, anchored at the bottom-left cell, because
//! the scan walks anchors from the bottom row up.
//!
//! The search is greedy: the first template that fits wins. Lower rows are
//! preferred since clearing low in the grid feeds more cascades above. The scan
//! order is part of the observable behaviour (which hint shows up) and must stay
//! bottom-up, left to right, templates in library order.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Point, MAX_RUN_LENGTH};

/// One potential-move shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// `(dx, dy_up)` per cell. The first cell is the reference cell.
    cells: ArrayVec<(i32, i32), MAX_RUN_LENGTH>,
    /// Index of the cell that is out of line.
    mover: usize,
    /// Where the out-of-line cell has to go to complete the run.
    target: (i32, i32),
}

impl Template {
    #[cfg(test)]
    fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    fn transposed(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|&(x, y)| (y, x)).collect(),
            mover: self.mover,
            target: (self.target.1, self.target.0),
        }
    }

    #[inline]
    fn place(anchor: Point, (dx, dy): (i32, i32)) -> Point {
        anchor.offset(dx, -dy)
    }

    /// Try the template with its bottom-left cell at `anchor`.
    fn match_at(&self, grid: &Grid, anchor: Point) -> Option<PotentialMove> {
        let reference = grid.get(Self::place(anchor, self.cells[0]))??;

        let mut points = ArrayVec::new();
        for &offset in &self.cells {
            let p = Self::place(anchor, offset);
            if grid.get(p) != Some(Some(reference)) {
                return None;
            }
            points.push(p);
        }

        Some(PotentialMove {
            swap: (points[self.mover], Self::place(anchor, self.target)),
            points,
        })
    }
}

/// A swap that would create a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialMove {
    /// The same-symbol cells the template matched, in template order.
    pub points: ArrayVec<Point, MAX_RUN_LENGTH>,
    /// Adjacent pair whose exchange completes the run.
    pub swap: (Point, Point),
}

/// Build the template library for runs of `k` cells.
///
/// Order: for each position `i` the "odd cell low" then "odd cell high"
/// shape, then the two single-row gap shapes; then all of it transposed.
pub fn build_templates(k: usize) -> Vec<Template> {
    assert!(
        (2..=MAX_RUN_LENGTH).contains(&k),
        "run length {} not supported",
        k
    );
    let k_i = k as i32;
    let mut horizontal = Vec::with_capacity(2 * k + 2);

    for i in 0..k_i {
        horizontal.push(Template {
            cells: (0..k_i).map(|j| (j, if j == i { 0 } else { 1 })).collect(),
            mover: i as usize,
            target: (i, 1),
        });
        horizontal.push(Template {
            cells: (0..k_i).map(|j| (j, if j == i { 1 } else { 0 })).collect(),
            mover: i as usize,
            target: (i, 0),
        });
    }

    horizontal.push(Template {
        cells: (0..k_i).map(|j| (if j == 0 { 0 } else { j + 1 }, 0)).collect(),
        mover: 0,
        target: (1, 0),
    });
    horizontal.push(Template {
        cells: (0..k_i)
            .map(|j| (if j == k_i - 1 { k_i } else { j }, 0))
            .collect(),
        mover: k - 1,
        target: (k_i - 1, 0),
    });

    let vertical: Vec<Template> = horizontal.iter().map(Template::transposed).collect();
    horizontal.extend(vertical);
    horizontal
}

/// Return the first potential move found, or `None` if the grid is dead.
pub fn find_potential_move(grid: &Grid, templates: &[Template]) -> Option<PotentialMove> {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let anchor = Point::new(x, y);
            if let Some(found) = templates.iter().find_map(|t| t.match_at(grid, anchor)) {
                return Some(found);
            }
        }
    }
    None
}
