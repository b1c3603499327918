//! Non-interactive replay of a move list.

use crate::games::tictactoe::{GameEngine, Transition};
use tracing::{debug, instrument};

/// Outcome of feeding a move list through a fresh engine.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Engine after the last move.
    pub engine: GameEngine,
    /// Moves the engine accepted.
    pub applied: usize,
    /// Moves the engine ignored.
    pub ignored: usize,
    /// Last accepted transition.
    pub last: Option<Transition>,
}

/// Applies `moves` (board indices 0-8) in order to a fresh engine.
#[instrument]
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut engine = GameEngine::new();
    let mut applied = 0;
    let mut ignored = 0;
    let mut last = None;

    for index in moves {
        match engine.apply_move(*index) {
            Transition::Ignored => {
                debug!(index, "Replay move ignored");
                ignored += 1;
            }
            transition => {
                applied += 1;
                last = Some(transition);
            }
        }
    }

    ReplayReport {
        engine,
        applied,
        ignored,
        last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Score};

    #[test]
    fn test_counts_ignored_moves() {
        let report = replay(&[4, 4, 0, 2, 8, 6, 1]);
        assert_eq!(report.applied, 5);
        assert_eq!(report.ignored, 2);
        assert!(matches!(
            report.last,
            Some(Transition::WinDetected { mark: Mark::X, .. })
        ));
        assert_eq!(report.engine.score(), Score::new(1, 0, 0));
    }

    #[test]
    fn test_empty_replay() {
        let report = replay(&[]);
        assert_eq!(report.applied, 0);
        assert_eq!(report.last, None);
    }
}
