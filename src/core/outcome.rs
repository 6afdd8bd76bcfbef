//! Terminal game outcomes and their training/logging encodings.

use std::fmt;

use chess::{BoardStatus, Color};

/// Result of a completed (or abandoned) self-play game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// White delivered checkmate.
    WhiteWin,
    /// Black delivered checkmate.
    BlackWin,
    /// Stalemate, or a claimable draw (repetition / fifty-move rule).
    Draw,
    /// The per-game ply bound was hit with the game still ongoing.
    Unfinished,
}

impl Outcome {
    /// Map a terminal board status to an outcome.
    ///
    /// Returns `None` while the game is ongoing. Checkmate is a loss for
    /// the side to move.
    #[must_use]
    pub fn from_status(status: BoardStatus, side_to_move: Color) -> Option<Outcome> {
        match status {
            BoardStatus::Checkmate => Some(match side_to_move {
                Color::White => Outcome::BlackWin,
                Color::Black => Outcome::WhiteWin,
            }),
            BoardStatus::Stalemate => Some(Outcome::Draw),
            BoardStatus::Ongoing => None,
        }
    }

    /// Scalar game score `z` from White's perspective.
    ///
    /// Unfinished games score as draws; the TD update sees no winner.
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            Outcome::WhiteWin => 1.0,
            Outcome::BlackWin => 0.0,
            Outcome::Draw | Outcome::Unfinished => 0.5,
        }
    }

    /// PGN result token.
    #[must_use]
    pub fn as_pgn(self) -> &'static str {
        match self {
            Outcome::WhiteWin => "1-0",
            Outcome::BlackWin => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unfinished => "*",
        }
    }

    /// True when one side actually won.
    #[must_use]
    pub fn is_decisive(self) -> bool {
        matches!(self, Outcome::WhiteWin | Outcome::BlackWin)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::WhiteWin => "white win",
            Outcome::BlackWin => "black win",
            Outcome::Draw => "draw",
            Outcome::Unfinished => "unfinished",
        };
        write!(f, "{}", text)
    }
}
