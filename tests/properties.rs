use std::collections::HashSet;

use match3::core::{CascadeStep, Engine, Grid, GridConfig, Match, SimpleRng};
use match3::types::{Cell, Direction, Point, Symbol};
use proptest::prelude::*;

/// Config plus a grid of that size; `fill` is the chance a cell holds a symbol.
fn arb_grid(fill: f64) -> impl Strategy<Value = (GridConfig, Grid)> {
    (3u8..=7, 3u8..=7, 3u8..=5).prop_flat_map(move |(width, height, symbol_count)| {
        let area = width as usize * height as usize;
        prop::collection::vec(arb_cell(fill, symbol_count), area).prop_map(
            move |cells| {
                let config = GridConfig {
                    width,
                    height,
                    symbol_count,
                    ..GridConfig::default()
                };
                (config, build_grid(width, height, &cells))
            },
        )
    })
}

/// A symbol index, or Empty with probability `1 - fill`.
fn arb_cell(fill: f64, symbol_count: u8) -> BoxedStrategy<Option<u8>> {
    if fill < 1.0 {
        prop::option::weighted(fill, 0..symbol_count).boxed()
    } else {
        (0..symbol_count).prop_map(Some).boxed()
    }
}

fn build_grid(width: u8, height: u8, cells: &[Option<u8>]) -> Grid {
    let mut grid = Grid::filled(width, height, None);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let cell: Cell = cells[(y * width as i32 + x) as usize].map(Symbol::new);
            grid.set(Point::new(x, y), cell);
        }
    }
    grid
}

/// Every maximal run, found line by line.
fn maximal_runs(grid: &Grid, min_run_length: usize) -> HashSet<Match> {
    let mut runs = HashSet::new();
    for direction in Direction::ALL {
        let (lines, len) = match direction {
            Direction::Horizontal => (grid.height() as i32, grid.width() as i32),
            Direction::Vertical => (grid.width() as i32, grid.height() as i32),
        };
        for line in 0..lines {
            let at = |i: i32| match direction {
                Direction::Horizontal => Point::new(i, line),
                Direction::Vertical => Point::new(line, i),
            };
            let mut start = 0;
            while start < len {
                let mut end = start + 1;
                while end < len && grid.cell(at(end)) == grid.cell(at(start)) {
                    end += 1;
                }
                if let Some(symbol) = grid.cell(at(start)) {
                    let length = (end - start) as usize;
                    if length >= min_run_length {
                        runs.insert(Match {
                            symbol,
                            origin: at(start),
                            direction,
                            length,
                        });
                    }
                }
                start = end;
            }
        }
    }
    runs
}

fn adjacent_pairs(grid: &Grid) -> Vec<(Point, Point)> {
    let mut pairs = Vec::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            for q in [p.offset(1, 0), p.offset(0, 1)] {
                if grid.contains(q) {
                    pairs.push((p, q));
                }
            }
        }
    }
    pairs
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_find_matches_reports_exactly_the_maximal_runs((config, grid) in arb_grid(0.9)) {
        let engine = Engine::new(config).unwrap();
        let matches = engine.find_matches(&grid);

        let found: HashSet<Match> = matches.iter().copied().collect();
        prop_assert_eq!(found.len(), matches.len());
        prop_assert_eq!(found, maximal_runs(&grid, 3));
    }

    #[test]
    fn prop_find_matches_is_idempotent((config, grid) in arb_grid(0.9)) {
        let engine = Engine::new(config).unwrap();
        prop_assert_eq!(engine.find_matches(&grid), engine.find_matches(&grid));
    }

    #[test]
    fn prop_full_grids_have_no_empty_cells((_config, grid) in arb_grid(1.0)) {
        prop_assert!(!grid.has_empty());
    }

    #[test]
    fn prop_no_match_contains_another((config, grid) in arb_grid(1.0)) {
        let matches = Engine::new(config).unwrap().find_matches(&grid);
        for (i, a) in matches.iter().enumerate() {
            for (j, b) in matches.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_subset_of(b), "{:?} inside {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn prop_resolve_cascade_stabilizes((config, grid) in arb_grid(0.7), seed in any::<u32>()) {
        let engine = Engine::new(config).unwrap();
        let mut grid = grid;
        let mut rng = SimpleRng::new(seed);
        let mut score = 0;

        let summary = engine.resolve_cascade(&mut grid, &mut rng, Some(&mut score));
        prop_assert!(!grid.has_empty());
        prop_assert!(engine.find_matches(&grid).is_empty());
        prop_assert_eq!(summary.score, score);
        prop_assert_eq!(
            engine.step_cascade(&mut grid, &mut rng, Some(&mut score)),
            CascadeStep::Stable
        );
    }

    #[test]
    fn prop_refill_step_fills_one_cell_per_column((config, grid) in arb_grid(0.6), seed in any::<u32>()) {
        prop_assume!(grid.has_empty());
        let engine = Engine::new(config).unwrap();
        let columns = (0..grid.width() as i32)
            .filter(|&x| grid.lowest_empty_in_column(x).is_some())
            .count();
        let before = grid.empty_count();

        let mut grid = grid;
        let step = engine.step_cascade(&mut grid, &mut SimpleRng::new(seed), None);
        prop_assert_eq!(step, CascadeStep::Refilled { columns });
        prop_assert_eq!(grid.empty_count(), before - columns);
    }

    #[test]
    fn prop_clear_step_empties_matched_cells((config, grid) in arb_grid(1.0)) {
        let engine = Engine::new(config).unwrap();
        let matches = engine.find_matches(&grid);
        prop_assume!(!matches.is_empty());
        let cells: HashSet<Point> = matches.iter().flat_map(|m| m.points()).collect();

        let mut grid = grid;
        let mut score = 0;
        let step = engine.step_cascade(&mut grid, &mut SimpleRng::new(1), Some(&mut score));
        prop_assert_eq!(step, CascadeStep::Cleared { matches: matches.len(), symbols: cells.len() });
        prop_assert_eq!(score, engine.score_matches(&matches));
        for p in cells {
            prop_assert_eq!(grid.cell(p), None);
        }
        prop_assert_eq!(grid.empty_count(), step_symbols(step));
    }

    #[test]
    fn prop_try_swap_applies_only_when_accepted((config, grid) in arb_grid(1.0), pick in any::<prop::sample::Index>()) {
        let engine = Engine::new(config).unwrap();
        let pairs = adjacent_pairs(&grid);
        let (a, b) = pairs[pick.index(pairs.len())];
        let before = grid.clone();

        let outcome = engine.try_swap(&grid, a, b);
        prop_assert_eq!(&grid, &before);

        let mut swapped = grid.clone();
        swapped.swap(a, b);
        prop_assert_eq!(outcome.accepted, !engine.find_matches(&swapped).is_empty());
        if outcome.accepted {
            prop_assert_eq!(outcome.grid, swapped);
        } else {
            prop_assert_eq!(outcome.grid, grid);
        }
    }

    #[test]
    fn prop_potential_move_agrees_with_brute_force((config, grid) in arb_grid(1.0), seed in any::<u32>()) {
        let engine = Engine::new(config).unwrap();
        let mut grid = grid;
        engine.resolve_cascade(&mut grid, &mut SimpleRng::new(seed), None);

        let any_swap_works = adjacent_pairs(&grid)
            .into_iter()
            .any(|(a, b)| engine.try_swap(&grid, a, b).accepted);

        match engine.find_potential_move(&grid) {
            Some(hint) => {
                let (a, b) = hint.swap;
                prop_assert!(a.is_adjacent(b));
                prop_assert!(engine.try_swap(&grid, a, b).accepted);
                let symbol = grid.cell(hint.points[0]);
                prop_assert!(hint.points.iter().all(|&p| grid.cell(p) == symbol));
            }
            None => prop_assert!(!any_swap_works, "missed a move in\n{}", grid),
        }
    }

    #[test]
    fn prop_ensure_potential_move_leaves_playable_grid((config, grid) in arb_grid(1.0), seed in any::<u32>()) {
        let engine = Engine::new(config).unwrap();
        let mut grid = grid;
        let mut rng = SimpleRng::new(seed);
        engine.resolve_cascade(&mut grid, &mut rng, None);
        let had_move = engine.find_potential_move(&grid).is_some();
        let before = grid.clone();

        let regenerations = engine.ensure_potential_move(&mut grid, &mut rng);
        prop_assert!(engine.find_potential_move(&grid).is_some());
        prop_assert!(engine.find_matches(&grid).is_empty());
        prop_assert_eq!(regenerations == 0, had_move);
        if had_move {
            prop_assert_eq!(grid, before);
        }
    }
}

fn step_symbols(step: CascadeStep) -> usize {
    match step {
        CascadeStep::Cleared { symbols, .. } => symbols,
        _ => 0,
    }
}
