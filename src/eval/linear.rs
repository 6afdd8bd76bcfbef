//! Linear position evaluator.

use crate::core::TrainRng;
use crate::eval::features::{FeatureVector, FEATURE_COUNT};

/// Fixed prior weights: material, mobility, center, pawn structure, bias.
///
/// Fresh runs start here (plus jitter); a malformed weight file falls
/// back here exactly.
pub const DEFAULT_WEIGHTS: [f64; FEATURE_COUNT] = [1.0, 0.1, 0.5, 0.5, 0.0];

/// Half-width of the uniform perturbation applied to fresh weights.
pub const INIT_JITTER: f64 = 0.05;

/// Linear evaluator: a white-perspective score as a dot product of
/// weights and features.
///
/// The trainer owns the evaluator for the process lifetime; the move
/// selector reads it and the TD updater mutates it between games.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearEvaluator {
    weights: [f64; FEATURE_COUNT],
}

impl LinearEvaluator {
    /// Create an evaluator with explicit weights.
    #[must_use]
    pub fn new(weights: [f64; FEATURE_COUNT]) -> Self {
        Self { weights }
    }

    /// Create an evaluator holding the fixed prior.
    #[must_use]
    pub fn default_prior() -> Self {
        Self::new(DEFAULT_WEIGHTS)
    }

    /// Perturb every weight by an independent uniform draw in
    /// ±`INIT_JITTER`.
    ///
    /// Breaks symmetry between otherwise-identical fresh runs.
    #[must_use]
    pub fn with_jitter(mut self, rng: &mut TrainRng) -> Self {
        for weight in &mut self.weights {
            *weight += rng.gen_range_f64(-INIT_JITTER..INIT_JITTER);
        }
        self
    }

    /// Evaluate a feature vector. No side effects.
    #[must_use]
    pub fn value(&self, features: &FeatureVector) -> f64 {
        self.weights
            .iter()
            .zip(features.iter())
            .map(|(weight, feature)| weight * feature)
            .sum()
    }

    /// Current weights.
    #[must_use]
    pub fn weights(&self) -> &[f64; FEATURE_COUNT] {
        &self.weights
    }

    /// Mutable access for the TD updater.
    pub fn weights_mut(&mut self) -> &mut [f64; FEATURE_COUNT] {
        &mut self.weights
    }
}
