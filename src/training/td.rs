//! Temporal-difference learning over recorded games.
//!
//! After each game the trajectory is replayed backwards: the last ply
//! is pulled toward the game result, every earlier ply toward the value
//! of its successor. All targets come from a value snapshot taken
//! before the first weight moves, so the order of updates within one
//! game cannot feed back into itself.

use crate::eval::LinearEvaluator;
use crate::training::trajectory::Trajectory;

/// TD errors are clamped to this magnitude before any weight moves.
pub const TD_ERROR_CLAMP: f64 = 1.0;

/// Largest change a single ply may make to one weight.
pub const WEIGHT_STEP_CLAMP: f64 = 0.05;

/// Multiplicative shrink applied to every weight once per processed ply.
pub const WEIGHT_DECAY: f64 = 0.9999;

/// Summary of one backward pass, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TdStats {
    /// Number of plies the pass visited.
    pub plies_processed: usize,
    /// Largest clamped |TD error| seen.
    pub max_error: f64,
    /// Mean clamped |TD error| over the game.
    pub mean_error: f64,
}

/// Applies TD(1)-style updates to a [`LinearEvaluator`].
#[derive(Clone, Copy, Debug)]
pub struct TdUpdater {
    alpha: f64,
    discount: f64,
}

impl TdUpdater {
    /// Create an updater with the given learning rate and discount.
    #[must_use]
    pub fn new(alpha: f64, discount: f64) -> Self {
        Self { alpha, discount }
    }

    /// The learning rate.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The per-ply discount on the successor value.
    #[must_use]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Run one backward pass over `trajectory` given the game score `z`
    /// (1.0 White win, 0.0 Black win, 0.5 draw).
    ///
    /// The terminal target is `2 * (z - 0.5)`, mapping the score onto
    /// the evaluator's [-1, 1] value scale. An empty trajectory leaves
    /// the evaluator untouched.
    pub fn update(
        &self,
        evaluator: &mut LinearEvaluator,
        trajectory: &Trajectory,
        z: f64,
    ) -> TdStats {
        if trajectory.is_empty() {
            return TdStats::default();
        }

        // Snapshot every position's value up front; later plies are
        // updated first and must not alter earlier plies' targets.
        let values: Vec<f64> = trajectory
            .iter()
            .map(|ply| evaluator.value(&ply.features))
            .collect();
        let terminal = 2.0 * (z - 0.5);

        let mut max_error = 0.0f64;
        let mut error_sum = 0.0;

        for (t, ply) in trajectory.iter().enumerate().rev() {
            let next = if t + 1 == values.len() {
                terminal
            } else {
                values[t + 1]
            };
            let delta =
                (self.discount * next - values[t]).clamp(-TD_ERROR_CLAMP, TD_ERROR_CLAMP);
            max_error = max_error.max(delta.abs());
            error_sum += delta.abs();

            let weights = evaluator.weights_mut();
            for (weight, &feature) in weights.iter_mut().zip(ply.features.iter()) {
                let step =
                    (self.alpha * delta * feature).clamp(-WEIGHT_STEP_CLAMP, WEIGHT_STEP_CLAMP);
                *weight += step;
            }
            for weight in weights.iter_mut() {
                *weight *= WEIGHT_DECAY;
            }
        }

        TdStats {
            plies_processed: trajectory.len(),
            max_error,
            mean_error: error_sum / trajectory.len() as f64,
        }
    }
}
