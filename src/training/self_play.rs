//! Self-play game generation.
//!
//! One driver plays a full game between two copies of the same
//! evaluator, recording the feature trajectory for the learner and the
//! SAN move list for the PGN log.

use chess::Game;
use log::debug;

use crate::core::{Outcome, TrainRng};
use crate::eval::features::extract;
use crate::eval::LinearEvaluator;
use crate::pgn::san;
use crate::policy::MoveSelector;

use super::trajectory::{Ply, Trajectory};

/// Everything one finished game leaves behind.
#[derive(Clone)]
pub struct PlayedGame {
    /// Pre-move features of every position the mover faced.
    pub trajectory: Trajectory,
    /// How the game ended.
    pub outcome: Outcome,
    /// The position the game stopped in.
    pub final_board: chess::Board,
    /// Moves in SAN, in the order played.
    pub san_moves: Vec<String>,
}

/// Plays games of the evaluator against itself.
#[derive(Clone, Debug)]
pub struct SelfPlayDriver {
    selector: MoveSelector,
    max_plies: usize,
}

impl SelfPlayDriver {
    /// Create a driver that cuts games off after `max_plies` half-moves.
    #[must_use]
    pub fn new(selector: MoveSelector, max_plies: usize) -> Self {
        Self {
            selector,
            max_plies,
        }
    }

    #[must_use]
    pub fn selector(&self) -> &MoveSelector {
        &self.selector
    }

    #[must_use]
    pub fn max_plies(&self) -> usize {
        self.max_plies
    }

    /// Play one game from the standard starting position.
    pub fn play_game(&self, evaluator: &LinearEvaluator, rng: &mut TrainRng) -> PlayedGame {
        self.play_from(Game::new(), evaluator, rng)
    }

    /// Play one game from an arbitrary starting point.
    ///
    /// The game ends on checkmate or stalemate, when a draw can be
    /// declared (threefold repetition or the fifty-move rule), or when
    /// the ply bound runs out, whichever comes first. Features are
    /// extracted from each position before the chosen move is applied.
    pub fn play_from(
        &self,
        mut game: Game,
        evaluator: &LinearEvaluator,
        rng: &mut TrainRng,
    ) -> PlayedGame {
        let mut trajectory = Trajectory::new();
        let mut san_moves = Vec::new();

        let outcome = loop {
            let board = game.current_position();
            if let Some(outcome) = Outcome::from_status(board.status(), board.side_to_move()) {
                break outcome;
            }
            if game.can_declare_draw() {
                break Outcome::Draw;
            }
            if trajectory.len() >= self.max_plies {
                break Outcome::Unfinished;
            }

            let mv = match self.selector.choose(&board, evaluator, rng) {
                Some(mv) => mv,
                // Unreachable while the game is ongoing; treated as a
                // cut-off rather than a panic.
                None => break Outcome::Unfinished,
            };

            let notation = san(&board, mv);
            trajectory.push(Ply {
                features: extract(&board),
                side_to_move: board.side_to_move(),
            });

            let applied = game.make_move(mv);
            debug_assert!(applied, "selector produced an illegal move");
            debug!(
                "ply {}: {} ({})",
                trajectory.len(),
                notation,
                game.current_position()
            );
            san_moves.push(notation);
        };

        PlayedGame {
            trajectory,
            outcome,
            final_board: game.current_position(),
            san_moves,
        }
    }
}
