//! # chess-td
//!
//! A self-teaching chess engine built on a linear position evaluator
//! and temporal-difference learning from self-play.
//!
//! ## How it learns
//!
//! The evaluator scores a position as a dot product over five
//! normalized features: material, mobility, center control, doubled
//! pawns, and a bias term. Two copies of it play each other with
//! epsilon-greedy one-ply lookahead; after every game the trajectory is
//! replayed backwards and each position's value is nudged toward the
//! value of its successor (TD learning), with the final position pulled
//! toward the game result. Weights persist between runs, so training
//! accumulates.
//!
//! ## Modules
//!
//! - `core`: game outcomes and the deterministic, forkable RNG
//! - `eval`: feature extraction, the linear evaluator, weight storage
//! - `policy`: epsilon-greedy move selection
//! - `training`: self-play games, TD updates, and the run loop
//! - `pgn`: SAN rendering and the append-only PGN game log

pub mod core;
pub mod eval;
pub mod pgn;
pub mod policy;
pub mod training;

// Re-export commonly used types
pub use crate::core::{Outcome, TrainRng};

pub use crate::eval::{
    extract, FeatureVector, LinearEvaluator, WeightStore, DEFAULT_WEIGHTS, FEATURE_COUNT,
};

pub use crate::pgn::{san, GameRecord, PgnLog};

pub use crate::policy::MoveSelector;

pub use crate::training::{
    PlayedGame, SelfPlayDriver, TdStats, TdUpdater, TrainConfig, Trainer, TrainingStats,
    Trajectory,
};
