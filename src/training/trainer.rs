//! The outer training loop: play, learn, persist.

use std::path::PathBuf;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::TrainRng;
use crate::eval::{LinearEvaluator, WeightStore};
use crate::pgn::{GameRecord, PgnLog};
use crate::policy::MoveSelector;

use super::self_play::SelfPlayDriver;
use super::stats::TrainingStats;
use super::td::TdUpdater;

/// Configuration for a training run.
///
/// Values are taken as given; an epsilon outside [0, 1] behaves as its
/// nearest bound during move selection, and a NaN epsilon never
/// explores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Number of self-play games to run.
    pub games: u32,

    /// Probability of playing a random move instead of the greedy one.
    pub epsilon: f64,

    /// Learning rate for the TD update.
    pub alpha: f64,

    /// Discount on the successor value inside the TD target.
    pub discount: f64,

    /// Hard cap on half-moves per game.
    pub max_plies: usize,

    /// Where weights are loaded from and saved to.
    pub weights_path: PathBuf,

    /// PGN log destination; `None` disables game logging.
    pub pgn_path: Option<PathBuf>,

    /// Seed for the run; every game forks its own stream from it.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            games: 100,
            epsilon: 0.5,
            alpha: 0.0005,
            discount: 1.0,
            max_plies: 600,
            weights_path: PathBuf::from("weights.bin"),
            pgn_path: Some(PathBuf::from("selfplay_games.pgn")),
            seed: 42,
        }
    }
}

impl TrainConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    #[must_use]
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    #[must_use]
    pub fn with_weights_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.weights_path = path.into();
        self
    }

    #[must_use]
    pub fn with_pgn_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pgn_path = Some(path.into());
        self
    }

    /// Turn PGN logging off entirely.
    #[must_use]
    pub fn without_pgn_log(mut self) -> Self {
        self.pgn_path = None;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Runs self-play games and folds each one back into the evaluator.
pub struct Trainer {
    config: TrainConfig,
    evaluator: LinearEvaluator,
    store: WeightStore,
    rng: TrainRng,
}

impl Trainer {
    /// Set up a trainer, resuming from saved weights when they exist.
    ///
    /// A missing weight file starts the evaluator from the jittered
    /// prior; an unreadable one is an error.
    pub fn new(config: TrainConfig) -> anyhow::Result<Self> {
        let store = WeightStore::new(&config.weights_path);
        let mut rng = TrainRng::new(config.seed);

        let evaluator = match store.load()? {
            Some(weights) => {
                info!("resuming from weights in {}", store.path().display());
                LinearEvaluator::new(weights)
            }
            None => {
                info!(
                    "no weights at {}, starting from the jittered prior",
                    store.path().display()
                );
                LinearEvaluator::default_prior().with_jitter(&mut rng)
            }
        };
        debug!("initial weights: {:?}", evaluator.weights());

        Ok(Self {
            config,
            evaluator,
            store,
            rng,
        })
    }

    /// The evaluator in its current state.
    #[must_use]
    pub fn evaluator(&self) -> &LinearEvaluator {
        &self.evaluator
    }

    /// Play the configured number of games, updating weights after each
    /// and saving them once at the end.
    pub fn run(&mut self) -> anyhow::Result<TrainingStats> {
        let driver = SelfPlayDriver::new(
            MoveSelector::new(self.config.epsilon),
            self.config.max_plies,
        );
        let updater = TdUpdater::new(self.config.alpha, self.config.discount);
        let pgn_log = self.config.pgn_path.as_ref().map(PgnLog::new);
        let mut stats = TrainingStats::new();

        for round in 1..=self.config.games {
            let mut game_rng = self.rng.fork();
            let played = driver.play_game(&self.evaluator, &mut game_rng);
            stats.record(played.outcome);

            let td = updater.update(
                &mut self.evaluator,
                &played.trajectory,
                played.outcome.score(),
            );

            if let Some(log) = &pgn_log {
                let record =
                    GameRecord::training_game(round, played.san_moves, played.outcome);
                log.append(&record)?;
                debug!("appended game {} to {}", round, log.path().display());
            }

            info!(
                "game {}/{}: {} in {} plies (max td error {:.4}); {}",
                round,
                self.config.games,
                played.outcome,
                td.plies_processed,
                td.max_error,
                stats
            );
            debug!("weights after game {}: {:?}", round, self.evaluator.weights());
        }

        self.store.save(self.evaluator.weights())?;
        info!(
            "training complete, final weights {:?} saved to {}",
            self.evaluator.weights(),
            self.store.path().display()
        );
        Ok(stats)
    }
}
