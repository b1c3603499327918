//! Alternating turn invariant: marks alternate from the round's opener.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: the i-th history entry holds the opener's mark for even i and
/// the other mark for odd i. While the round is live the current player is
/// the mark due next; once it is over, the mark that moved last.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    fn mark_for_ply(engine: &GameEngine, ply: usize) -> Mark {
        let opener = engine.round_starting_player();
        if ply % 2 == 0 {
            opener
        } else {
            opener.opponent()
        }
    }
}

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(ply, pos)| {
            engine.board().get(*pos).mark() == Some(Self::mark_for_ply(engine, ply))
        });
        if !alternates {
            return false;
        }

        let expected = match (engine.is_game_over(), history.len()) {
            (true, 0) => return false,
            (true, len) => Self::mark_for_ply(engine, len - 1),
            (false, len) => Self::mark_for_ply(engine, len),
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Marks alternate from the round's opener and the turn follows the history"
    }
}
