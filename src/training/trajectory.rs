//! Recorded per-ply data from a self-play game.

use chess::Color;

use crate::eval::FeatureVector;

/// One position as the side to move saw it, captured before the chosen
/// move was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ply {
    /// Feature vector of the pre-move position.
    pub features: FeatureVector,
    /// Who was to move.
    pub side_to_move: Color,
}

/// The ordered plies of one game, oldest first.
///
/// Only what the learner needs survives the game: feature vectors and
/// the side to move. Boards and chosen moves are not kept here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    plies: Vec<Ply>,
}

impl Trajectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ply: Ply) {
        self.plies.push(ply);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// Iterate plies in game order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Ply> + ExactSizeIterator {
        self.plies.iter()
    }
}
