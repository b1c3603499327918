//! Session scoreboard.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Cumulative results across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    x: u32,
    o: u32,
    draws: u32,
}

impl Score {
    /// Creates a scoreboard with the given counts.
    pub fn new(x: u32, o: u32, draws: u32) -> Self {
        Self { x, o, draws }
    }

    /// Rounds won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Rounds won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub(super) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    pub(super) fn record_draw(&mut self) {
        self.draws += 1;
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score — X: {} | O: {} | Draws: {}",
            self.x, self.o, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_by_mark() {
        let mut score = Score::default();
        score.record_win(Mark::O);
        score.record_win(Mark::O);
        score.record_draw();
        assert_eq!(score, Score::new(0, 2, 1));
        assert_eq!(score.wins(Mark::O), 2);
        assert_eq!(score.wins(Mark::X), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Score::new(3, 1, 2).to_string(),
            "Score — X: 3 | O: 1 | Draws: 2"
        );
    }
}
