//! Engine - the grid engine's public entry point
//!
//! An [`Engine`] bundles a validated [`GridConfig`] with the template library
//! built from it. It owns no grid and no RNG: every call borrows the caller's
//! grid and random source for its duration only.

use log::debug;

use crate::cascade::{self, CascadeRules, CascadeStep, CascadeSummary};
use crate::config::{ConfigError, GridConfig};
use crate::grid::Grid;
use crate::matcher::{self, Match};
use crate::potential::{self, PotentialMove, Template};
use crate::rng::RandomSource;
use crate::scoring;
use crate::swap::{self, SwapOutcome};
use crate::types::Point;

#[derive(Debug, Clone)]
pub struct Engine {
    config: GridConfig,
    rules: CascadeRules,
    templates: Vec<Template>,
}

impl Engine {
    /// Validate `config` and build the template library.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: GridConfig) -> Self {
        let min_run_length = config.min_run_length as usize;
        Self {
            config,
            rules: CascadeRules {
                symbol_count: config.symbol_count,
                min_run_length,
                points_per_symbol: config.points_per_symbol,
            },
            templates: potential::build_templates(min_run_length),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Fill every cell independently and uniformly from the alphabet.
    ///
    /// The result may contain matches and may be dead.
    pub fn new_grid<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut grid = Grid::filled(self.config.width, self.config.height, None);
        for y in 0..self.config.height as i32 {
            for x in 0..self.config.width as i32 {
                grid.set(Point::new(x, y), Some(self.rules.random_symbol(rng)));
            }
        }
        grid
    }

    /// A random grid with every initial match cascaded away, without scoring.
    pub fn new_grid_with_no_matches<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut grid = self.new_grid(rng);
        cascade::resolve_cascade(&self.rules, &mut grid, rng, None);
        grid
    }

    /// Make sure `grid` has at least one potential move.
    ///
    /// A grid that already has one is left as is. Otherwise it is replaced by
    /// fresh match-free grids until one has a move. Returns the number of
    /// replacements.
    pub fn ensure_potential_move<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> u32 {
        let mut regenerations = 0;
        while self.find_potential_move(grid).is_none() {
            *grid = self.new_grid_with_no_matches(rng);
            regenerations += 1;
        }
        if regenerations > 0 {
            debug!("dead grid replaced after {} regenerations", regenerations);
        }
        regenerations
    }

    /// All maximal runs, with no match contained in another.
    pub fn find_matches(&self, grid: &Grid) -> Vec<Match> {
        matcher::find_matches(grid, self.rules.min_run_length)
    }

    /// First potential move in bottom-up, left-to-right order; `None` for a dead grid.
    pub fn find_potential_move(&self, grid: &Grid) -> Option<PotentialMove> {
        potential::find_potential_move(grid, &self.templates)
    }

    /// One cascade step. Pass `None` as `score` to suppress scoring.
    pub fn step_cascade<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        score: Option<&mut u32>,
    ) -> CascadeStep {
        cascade::step_cascade(&self.rules, grid, rng, score)
    }

    /// Step the cascade until the grid is stable.
    pub fn resolve_cascade<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        score: Option<&mut u32>,
    ) -> CascadeSummary {
        cascade::resolve_cascade(&self.rules, grid, rng, score)
    }

    /// Evaluate swapping `a` and `b` without touching `grid`.
    pub fn try_swap(&self, grid: &Grid, a: Point, b: Point) -> SwapOutcome {
        swap::try_swap(grid, a, b, self.rules.min_run_length)
    }

    /// Points for clearing `matches`.
    pub fn score_matches(&self, matches: &[Match]) -> u32 {
        scoring::score_matches(matches, self.config.points_per_symbol)
    }
}

impl Default for Engine {
    /// Engine with the reference 10x10, 6-symbol rules.
    fn default() -> Self {
        Self::from_valid(GridConfig::default())
    }
}
