//! Round-based tic-tac-toe engine with undo and a session scoreboard.
//!
//! The engine owns all game state and is driven through four operations:
//! [`GameEngine::apply_move`], [`GameEngine::undo_move`],
//! [`GameEngine::new_round`] and [`GameEngine::reset_score`]. Each returns a
//! value describing what changed so a presentation layer can re-render
//! without re-deriving any rules.
//!
//! Requests that do not apply right now (occupied square, finished round,
//! empty history, out-of-range index) resolve to [`Transition::Ignored`] and
//! leave every piece of state untouched.

use super::invariants::{EngineInvariants, InvariantSet};
use super::position::Position;
use super::rules::{self, WinLine};
use super::score::Score;
use super::types::{Board, Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Round started, no moves yet.
    Idle,
    /// At least one move, no result yet.
    InProgress,
    /// Round won by the given mark.
    Won(Mark),
    /// Board filled with no completed line.
    Drawn,
}

impl Phase {
    /// Won or drawn.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn)
    }
}

/// What an engine operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A mark was placed and play passes to the other mark.
    MoveApplied {
        /// Square that was filled.
        position: Position,
        /// Mark that was placed.
        mark: Mark,
    },
    /// The move completed a line. The round is over.
    WinDetected {
        /// Winning mark.
        mark: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// The move filled the board without completing a line.
    DrawDetected,
    /// The last move was taken back.
    UndoApplied {
        /// Square that was cleared.
        position: Position,
    },
    /// A fresh round began.
    RoundStarted {
        /// Mark that opens the round.
        starter: Mark,
    },
    /// The request did not apply; nothing changed.
    Ignored,
}

/// Serializable view of the whole engine for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Board squares.
    board: Board,
    /// Positions played this round, oldest first.
    history: Vec<Position>,
    /// Mark to move (or the last mover once the round is over).
    current_player: Mark,
    /// Mark that opened the round.
    round_starting_player: Mark,
    /// Whether the round has concluded.
    game_over: bool,
    /// Round phase.
    phase: Phase,
    /// Completed line of a won round.
    winning_line: Option<WinLine>,
    /// Session scoreboard.
    score: Score,
}

/// Tic-tac-toe engine for a multi-round session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) history: Vec<Position>,
    pub(super) current_player: Mark,
    pub(super) game_over: bool,
    pub(super) round_starting_player: Mark,
    pub(super) winner: Option<(Mark, WinLine)>,
    pub(super) score: Score,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and a zeroed score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            current_player: Mark::X,
            game_over: false,
            round_starting_player: Mark::X,
            winner: None,
            score: Score::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Ignored when the round is over, the index is out of range or the
    /// square is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Transition {
        if self.game_over {
            debug!("Round is over, move ignored");
            return Transition::Ignored;
        }
        let Some(position) = Position::from_index(index) else {
            debug!("Index out of range, move ignored");
            return Transition::Ignored;
        };
        if !self.board.is_empty(position) {
            debug!(%position, "Square occupied, move ignored");
            return Transition::Ignored;
        }

        let mark = self.current_player;
        self.board.set(position, Square::Occupied(mark));
        self.history.push(position);

        let transition = if let Some((winner, line)) = rules::check_winner(&self.board) {
            self.game_over = true;
            self.winner = Some((winner, line));
            self.score.record_win(winner);
            info!(%winner, %line, wins = self.score.wins(winner), "Round won");
            Transition::WinDetected { mark: winner, line }
        } else if rules::is_full(&self.board) {
            self.game_over = true;
            self.score.record_draw();
            info!("Round drawn");
            Transition::DrawDetected
        } else {
            self.current_player = mark.opponent();
            debug!(%position, next = %self.current_player, "Move applied");
            Transition::MoveApplied { position, mark }
        };

        self.verify();
        transition
    }

    /// Takes back the most recent move of the live round.
    ///
    /// Ignored when nothing has been played or the round is over, so a
    /// recorded result can never be undone.
    #[instrument(skip(self))]
    pub fn undo_move(&mut self) -> Transition {
        if self.game_over {
            debug!("Round is over, undo ignored");
            return Transition::Ignored;
        }
        let Some(position) = self.history.pop() else {
            debug!("No moves to undo");
            return Transition::Ignored;
        };

        self.board.set(position, Square::Empty);
        // Turns strictly alternate, so the undone move belongs to the opponent.
        self.current_player = self.current_player.opponent();
        debug!(%position, next = %self.current_player, "Move undone");

        self.verify();
        Transition::UndoApplied { position }
    }

    /// Clears the board and starts a round opened by the other mark.
    ///
    /// Always succeeds. A round in progress is abandoned without scoring.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Transition {
        if !self.game_over && !self.history.is_empty() {
            info!(moves = self.history.len(), "Abandoning unfinished round");
        }

        self.board = Board::new();
        self.history.clear();
        self.game_over = false;
        self.winner = None;
        self.round_starting_player = self.round_starting_player.opponent();
        self.current_player = self.round_starting_player;
        info!(starter = %self.current_player, "New round");

        self.verify();
        Transition::RoundStarted {
            starter: self.current_player,
        }
    }

    /// Zeroes the scoreboard. Board, history and turn state are untouched.
    ///
    /// Callers are expected to confirm with the user first.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn reset_score(&mut self) {
        self.score = Score::default();
        info!("Score reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions played this round, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Mark to move, or the mark that made the final move once the round is over.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Whether the round has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Mark that opened the current round.
    pub fn round_starting_player(&self) -> Mark {
        self.round_starting_player
    }

    /// Session scoreboard.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Completed line of a won round.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winner.map(|(_, line)| line)
    }

    /// Where the current round stands.
    pub fn phase(&self) -> Phase {
        match (self.game_over, self.winner) {
            (true, Some((mark, _))) => Phase::Won(mark),
            (true, None) => Phase::Drawn,
            (false, _) if self.history.is_empty() => Phase::Idle,
            (false, _) => Phase::InProgress,
        }
    }

    /// Squares still open for the current player.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.game_over {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Owned copy of the full state.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            history: self.history.clone(),
            current_player: self.current_player,
            round_starting_player: self.round_starting_player,
            game_over: self.game_over,
            phase: self.phase(),
            winning_line: self.winning_line(),
            score: self.score,
        }
    }

    /// Checks engine invariants in debug builds.
    fn verify(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Engine invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
