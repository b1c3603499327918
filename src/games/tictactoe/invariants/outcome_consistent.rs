//! Outcome consistency invariant: the game-over flag agrees with the board.

use super::super::{rules, GameEngine};
use super::Invariant;

/// Invariant: the round is over exactly when the board holds a completed line
/// or is full, and the recorded winning line is the one on the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let winner = rules::check_winner(engine.board());
        let finished = winner.is_some() || rules::is_draw(engine.board());

        engine.is_game_over() == finished && engine.winner == winner
    }

    fn description() -> &'static str {
        "Game-over flag and winner match the board"
    }
}
