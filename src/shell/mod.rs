//! Terminal presentation shell.
//!
//! Turns typed lines into engine operations and renders the result. Holds no
//! game rules of its own.

mod command;
mod error;
mod render;
mod repl;
mod replay;

pub use command::{Command, CommandError, HELP};
pub use error::ShellError;
pub use render::{opening_status, render_board, render_engine, status_for};
pub use repl::{Flow, Shell};
pub use replay::{replay, ReplayReport};
