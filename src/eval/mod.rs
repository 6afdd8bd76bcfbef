//! Position evaluation: feature extraction, the linear evaluator, and
//! weight persistence.
//!
//! ## Overview
//!
//! - **features**: maps a `chess::Board` to a fixed 5-component vector
//! - **LinearEvaluator**: dot product of weights and features
//! - **WeightStore**: bincode weight file, the only cross-run state

pub mod features;
pub mod linear;
pub mod store;

pub use features::{extract, FeatureVector, CENTER_SQUARES, FEATURE_COUNT};
pub use linear::{LinearEvaluator, DEFAULT_WEIGHTS, INIT_JITTER};
pub use store::WeightStore;
