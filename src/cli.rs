//! Command-line interface for strictly_rounds.

use clap::{Parser, Subcommand};

/// Strictly Rounds - two-player tic-tac-toe with score and undo
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the shell configuration file
    #[arg(long, global = true, default_value = "strictly_rounds.toml")]
    pub config: std::path::PathBuf,

    /// Print one JSON object per update instead of the text board
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a list of board indices (0-8) to a fresh game and print the result
    Replay {
        /// Board indices in play order
        #[arg(value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,
    },
}
