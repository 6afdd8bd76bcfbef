//! Self-play training CLI.
//!
//! Runs the configured number of self-play games, learning after each
//! one, then saves the weights. Re-running picks up where the last run
//! left off.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use chess_td::{TrainConfig, Trainer};

/// Self-teaching chess engine
#[derive(Parser, Debug)]
#[command(name = "chess-td")]
#[command(about = "Train a linear chess evaluator by self-play", long_about = None)]
struct Args {
    /// Number of self-play games to run
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Probability of playing a random move instead of the greedy one
    #[arg(long, default_value_t = 0.5)]
    epsilon: f64,

    /// Learning rate for the TD update
    #[arg(long, default_value_t = 0.0005)]
    alpha: f64,

    /// Discount on the successor value inside the TD target
    #[arg(long, default_value_t = 1.0)]
    discount: f64,

    /// Hard cap on half-moves per game
    #[arg(long, default_value_t = 600)]
    max_plies: usize,

    /// Weight file to load from and save to
    #[arg(long, default_value = "weights.bin")]
    weights: PathBuf,

    /// PGN file the games are appended to
    #[arg(long, default_value = "selfplay_games.pgn")]
    pgn: PathBuf,

    /// Skip PGN logging entirely
    #[arg(long, default_value_t = false)]
    no_pgn: bool,

    /// Seed for the run; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut config = TrainConfig::new()
        .with_games(args.games)
        .with_epsilon(args.epsilon)
        .with_alpha(args.alpha)
        .with_discount(args.discount)
        .with_max_plies(args.max_plies)
        .with_weights_path(args.weights)
        .with_pgn_path(args.pgn)
        .with_seed(seed);
    if args.no_pgn {
        config = config.without_pgn_log();
    }

    info!(
        "training for {} games (epsilon {}, alpha {}, seed {})",
        config.games, config.epsilon, config.alpha, config.seed
    );

    let stats = Trainer::new(config)?.run()?;
    info!("finished: {stats}");
    Ok(())
}
