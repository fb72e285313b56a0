//! Scoring module
//!
//! A clear is worth `points_per_symbol` for every cell of every match. A cell
//! shared by a horizontal and a vertical match is counted once per match, so
//! crosses and L-shapes pay a little more than their cell count.

use crate::matcher::Match;

/// Total symbols across `matches`, counted per match.
pub fn matched_symbol_count(matches: &[Match]) -> usize {
    matches.iter().map(|m| m.length).sum()
}

/// Score for clearing `matches` at once (saturating).
pub fn score_matches(matches: &[Match], points_per_symbol: u32) -> u32 {
    let symbols = u32::try_from(matched_symbol_count(matches)).unwrap_or(u32::MAX);
    symbols.saturating_mul(points_per_symbol)
}
