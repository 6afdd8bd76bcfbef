//! Self-play training: game generation, TD learning, and the outer loop.
//!
//! - [`SelfPlayDriver`] plays the evaluator against itself and records
//!   a [`Trajectory`] plus the SAN move list.
//! - [`TdUpdater`] replays each finished game backwards and nudges the
//!   weights toward the observed result.
//! - [`Trainer`] ties the two together across a whole run: it loads or
//!   initializes weights, plays the configured number of games, logs
//!   them as PGN, and saves the weights at the end.

pub mod self_play;
pub mod stats;
pub mod td;
pub mod trainer;
pub mod trajectory;

pub use self_play::{PlayedGame, SelfPlayDriver};
pub use stats::TrainingStats;
pub use td::{TdStats, TdUpdater};
pub use trainer::{TrainConfig, Trainer};
pub use trajectory::{Ply, Trajectory};
