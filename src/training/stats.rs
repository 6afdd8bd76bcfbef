//! Running win/loss/draw tallies across a training run.

use std::fmt;

use crate::core::Outcome;

/// Counters over the games played so far.
///
/// Unfinished games land in the draw bucket: for the learner they carry
/// the same half-point score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingStats {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
}

impl TrainingStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WhiteWin => self.white_wins += 1,
            Outcome::BlackWin => self.black_wins += 1,
            Outcome::Draw | Outcome::Unfinished => self.draws += 1,
        }
    }

    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }
}

impl fmt::Display for TrainingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} white wins, {} black wins, {} draws",
            self.white_wins, self.black_wins, self.draws
        )
    }
}
