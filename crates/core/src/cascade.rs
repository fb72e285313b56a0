//! Cascade resolver
//!
//! Advances a grid one discrete step toward stability. Each call does exactly
//! one of:
//!
//! 1. **Refill**: some column holds Empty cells. In every such column the cells
//!    above the lowest Empty cell drop by one and a fresh random symbol enters
//!    at row 0.
//! 2. **Clear**: no Empty cells. Matches are recomputed; if there are none the
//!    grid is stable, otherwise the matched cells become Empty (after
//!    optionally adding to the score).
//!
//! There is no notion of time here. An animated caller yields between calls;
//! a caller that wants the final grid immediately uses [`resolve_cascade`].
//!
//! Each refill step turns one Empty cell per affected column into a symbol,
//! so a grid with `e` Empty cells needs at most `e` refill steps before the next
//! clear.

use log::trace;

use crate::grid::Grid;
use crate::matcher::{find_matches, Match};
use crate::rng::RandomSource;
use crate::scoring::score_matches;
use crate::types::{Cell, Symbol};

/// What a single cascade step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStep {
    /// Gravity + refill ran in `columns` columns.
    Refilled { columns: usize },
    /// `matches` runs covering `symbols` cells were set to Empty.
    Cleared { matches: usize, symbols: usize },
    /// No Empty cells and no matches.
    Stable,
}

impl CascadeStep {
    pub fn is_finished(&self) -> bool {
        matches!(self, CascadeStep::Stable)
    }
}

/// Totals for a cascade driven to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeSummary {
    /// Calls that did work (excludes the final `Stable` call).
    pub steps: usize,
    pub clears: usize,
    pub matches: usize,
    /// Score added to the accumulator, 0 when scoring was suppressed.
    pub score: u32,
}

/// Rules a cascade needs from the engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeRules {
    pub symbol_count: u8,
    pub min_run_length: usize,
    pub points_per_symbol: u32,
}

impl CascadeRules {
    pub fn random_symbol<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Symbol {
        Symbol::new(rng.next_below(self.symbol_count as u32) as u8)
    }
}

/// Run one cascade step. `score` is `None` when this step must not score.
pub fn step_cascade<R: RandomSource + ?Sized>(
    rules: &CascadeRules,
    grid: &mut Grid,
    rng: &mut R,
    score: Option<&mut u32>,
) -> CascadeStep {
    let (step, points) = advance(rules, grid, rng);
    if let Some(total) = score {
        *total = total.saturating_add(points);
    }
    step
}

/// Step until stable.
pub fn resolve_cascade<R: RandomSource + ?Sized>(
    rules: &CascadeRules,
    grid: &mut Grid,
    rng: &mut R,
    mut score: Option<&mut u32>,
) -> CascadeSummary {
    let mut summary = CascadeSummary::default();
    loop {
        let (step, points) = advance(rules, grid, rng);
        if let Some(total) = score.as_deref_mut() {
            *total = total.saturating_add(points);
            summary.score = summary.score.saturating_add(points);
        }

        match step {
            CascadeStep::Stable => return summary,
            CascadeStep::Refilled { .. } => {}
            CascadeStep::Cleared { matches, .. } => {
                summary.clears += 1;
                summary.matches += matches;
            }
        }
        summary.steps += 1;
    }
}

/// Do one step; also returns the points the step is worth.
fn advance<R: RandomSource + ?Sized>(
    rules: &CascadeRules,
    grid: &mut Grid,
    rng: &mut R,
) -> (CascadeStep, u32) {
    if grid.has_empty() {
        let columns = refill(rules, grid, rng);
        trace!("cascade refill: {} columns", columns);
        return (CascadeStep::Refilled { columns }, 0);
    }

    let matches = find_matches(grid, rules.min_run_length);
    if matches.is_empty() {
        return (CascadeStep::Stable, 0);
    }

    let points = score_matches(&matches, rules.points_per_symbol);
    let symbols = clear(grid, &matches);
    trace!("cascade clear: {} matches, {} cells", matches.len(), symbols);
    (
        CascadeStep::Cleared {
            matches: matches.len(),
            symbols,
        },
        points,
    )
}

/// One gravity step in every column that has an Empty cell.
fn refill<R: RandomSource + ?Sized>(rules: &CascadeRules, grid: &mut Grid, rng: &mut R) -> usize {
    let mut columns = 0;
    for x in 0..grid.width() as i32 {
        if let Some(y) = grid.lowest_empty_in_column(x) {
            let top: Cell = Some(rules.random_symbol(rng));
            grid.drop_column_into(x, y, top);
            columns += 1;
        }
    }
    columns
}

/// Set every matched cell to Empty; returns the number of distinct cells cleared.
fn clear(grid: &mut Grid, matches: &[Match]) -> usize {
    let mut cleared = 0;
    for p in matches.iter().flat_map(Match::points) {
        if grid.cell(p).is_some() {
            grid.set(p, None);
            cleared += 1;
        }
    }
    cleared
}
