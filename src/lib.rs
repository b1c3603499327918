//! Strictly Rounds - two-player tic-tac-toe with rounds, score and undo.
//!
//! # Architecture
//!
//! - **Games**: [`GameEngine`] owns the board, turn, move history, round
//!   rotation and scoreboard. Every operation returns a [`Transition`].
//! - **Shell**: a line-oriented terminal front end that forwards commands to
//!   the engine and renders the result.
//! - **Config**: TOML settings for the shell.
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{GameEngine, Mark, Transition};
//!
//! let mut engine = GameEngine::new();
//! for index in [4, 0, 2, 8] {
//!     engine.apply_move(index);
//! }
//! match engine.apply_move(6) {
//!     Transition::WinDetected { mark, line } => {
//!         assert_eq!(mark, Mark::X);
//!         assert_eq!(line.indices(), [2, 4, 6]);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert_eq!(engine.score().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod shell;

// Crate-level exports - Configuration
pub use config::{ConfigError, ShellConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    invariants, rules, Board, EngineSnapshot, GameEngine, Mark, Phase, Position, Score, Square,
    Transition, WinLine,
};
