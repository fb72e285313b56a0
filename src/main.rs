//! Headless match-3 runner (default binary).
//!
//! Plays a round by always taking the hint swap, printing the grid and score
//! after every turn. Useful for eyeballing the engine and for reproducing a
//! game from its seed.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use match3::config::AppConfig;
use match3::core::{Engine, RandAdapter};
use match3::game::{GameMode, Session};
use match3::logging;
use match3::types::DEFAULT_MOVE_LIMIT;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Endless,
    Limited,
}

/// Play a match-3 round on autopilot.
#[derive(Parser)]
#[command(name = "match3", about = "Play a match-3 round by following hints")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Game mode (overrides the config file)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Move limit; implies limited mode and cannot be combined with `--mode endless`
    #[arg(long)]
    moves: Option<u32>,

    /// Stop after this many turns (endless mode never ends on its own)
    #[arg(long, default_value_t = 50)]
    turns: u32,

    /// Print the final state as JSON instead of the per-turn grid
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Layer command-line flags over the loaded config and re-validate it.
fn apply_overrides(cli: &Cli, config: &mut AppConfig) -> Result<()> {
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    let limit = match config.game.mode {
        GameMode::LimitedMoves { limit } => limit,
        GameMode::Endless => DEFAULT_MOVE_LIMIT,
    };
    match cli.mode {
        Some(ModeArg::Endless) => config.game.mode = GameMode::Endless,
        Some(ModeArg::Limited) => config.game.mode = GameMode::LimitedMoves { limit },
        None => {}
    }
    if let Some(moves) = cli.moves {
        if matches!(cli.mode, Some(ModeArg::Endless)) {
            bail!("--moves cannot be combined with --mode endless");
        }
        if moves == 0 {
            bail!("--moves must be > 0");
        }
        config.game.mode = GameMode::LimitedMoves { limit: moves };
    }
    config.validate().context("validating config")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for_verbosity(cli.verbose))
        .map_err(|e| anyhow!("installing logger: {}", e))?;

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    apply_overrides(&cli, &mut config)?;

    let seed = config.game.seed.unwrap_or_else(rand::random);
    info!("seed {}", seed);

    let engine = Engine::new(config.grid).context("building engine")?;
    let rng = RandAdapter(StdRng::seed_from_u64(seed));
    let mut session = Session::new(engine, config.game.mode, rng);

    if !cli.json {
        println!("seed {} | mode {}", seed, config.game.mode.as_str());
        println!("{}\n", session.grid());
    }

    for turn in 1..=cli.turns {
        if session.is_over() {
            break;
        }
        let Some(hint) = session.hint() else {
            bail!("no potential move on a settled grid");
        };
        let (a, b) = hint.swap;
        if !session.swap(a, b)? {
            bail!("hint swap ({}, {}) <-> ({}, {}) was rejected", a.x, a.y, b.x, b.y);
        }
        let steps = session.skip();
        debug!("turn {} took {} cascade steps", turn, steps);

        if !cli.json {
            let remaining = session
                .remaining_moves()
                .map(|n| format!(" | {} moves left", n))
                .unwrap_or_default();
            println!(
                "turn {}: swap ({}, {}) <-> ({}, {}) | score {}{}",
                turn,
                a.x,
                a.y,
                b.x,
                b.y,
                session.score(),
                remaining
            );
            println!("{}\n", session.grid());
        }
    }
    session.end();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!(
            "final score {} after {} moves ({} dead grids replaced)",
            session.score(),
            session.moves(),
            session.regenerations()
        );
    }
    Ok(())
}
