//! Epsilon-greedy one-ply move selection.

use chess::{Board, ChessMove, Color, MoveGen};
use smallvec::SmallVec;

use crate::core::TrainRng;
use crate::eval::features::extract;
use crate::eval::LinearEvaluator;

/// Inline capacity for the legal-move buffer. Typical middlegame
/// positions stay under this; rare busy positions spill to the heap.
const MOVE_BUFFER: usize = 64;

/// Epsilon-greedy move selector over a one-ply lookahead.
///
/// With probability epsilon a uniformly random legal move is played
/// (exploration). Otherwise every legal move is applied to a scratch
/// copy of the board and scored by the evaluator; White picks the
/// highest score, Black the lowest. This is not minimax: the opponent's
/// reply is never examined.
#[derive(Clone, Debug)]
pub struct MoveSelector {
    epsilon: f64,
}

impl MoveSelector {
    /// Create a selector with the given exploration probability.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// The exploration probability.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Pick a move, or `None` when no legal move exists.
    ///
    /// Ties keep the first move seen, so the choice is stable over the
    /// move-generator's ordering. If a degenerate evaluator (NaN
    /// weights) scores nothing above the sentinel, a random legal move
    /// is played instead.
    pub fn choose(
        &self,
        board: &Board,
        evaluator: &LinearEvaluator,
        rng: &mut TrainRng,
    ) -> Option<ChessMove> {
        let legal: SmallVec<[ChessMove; MOVE_BUFFER]> = MoveGen::new_legal(board).collect();
        if legal.is_empty() {
            return None;
        }

        // Config values are type-checked only. The raw comparison
        // saturates out-of-range epsilon and treats NaN as never-explore.
        if rng.gen_range_f64(0.0..1.0) < self.epsilon {
            return rng.choose(&legal).copied();
        }

        let maximizing = board.side_to_move() == Color::White;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for &mv in &legal {
            let value = evaluator.value(&extract(&board.make_move_new(mv)));
            let better = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if better {
                best_value = value;
                best_move = Some(mv);
            }
        }

        best_move.or_else(|| rng.choose(&legal).copied())
    }
}
