//! History consistency invariant: history and board describe the same squares.

use super::super::{GameEngine, Position};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every history entry is a distinct occupied square, and every
/// occupied square has a history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let distinct: HashSet<Position> = history.iter().copied().collect();

        distinct.len() == history.len()
            && history.len() == engine.board().occupied_count()
            && history.iter().all(|pos| !engine.board().is_empty(*pos))
    }

    fn description() -> &'static str {
        "History entries are distinct and match the occupied squares"
    }
}
