//! Parsing of typed shell input into commands.

use crate::games::tictactoe::Position;
use derive_more::Display;
use std::str::FromStr;

/// A user action read from one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a square.
    Place(Position),
    /// Take back the last move.
    Undo,
    /// Start the next round.
    NewRound,
    /// Zero the scoreboard (after confirmation).
    ResetScore,
    /// Redraw the board and score.
    Show,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,

    /// A number outside 1-9.
    #[display("Square {} does not exist (use 1-9)", _0)]
    OutOfRange(usize),

    /// Anything else.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        // Squares are numbered 1-9 for people, 0-8 for the engine.
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(Command::Place)
                .ok_or(CommandError::OutOfRange(number));
        }

        match input.as_str() {
            "u" | "undo" => Ok(Command::Undo),
            "n" | "new" | "new round" => Ok(Command::NewRound),
            "r" | "reset" | "reset score" => Ok(Command::ResetScore),
            "s" | "state" | "show" => Ok(Command::Show),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Position::from_label(other)
                .map(Command::Place)
                .ok_or_else(|| CommandError::Unknown(s.trim().to_string())),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9 or a square name (e.g. center, top-left)  place the current mark
  u, undo                                       take back the last move
  n, new                                        start a new round
  r, reset                                      reset the scoreboard
  s, state                                      show board and score
  h, help                                       show this help
  q, quit                                       leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!("1".parse::<Command>(), Ok(Command::Place(Position::TopLeft)));
        assert_eq!(" 9 ".parse::<Command>(), Ok(Command::Place(Position::BottomRight)));
        assert_eq!("0".parse::<Command>(), Err(CommandError::OutOfRange(0)));
        assert_eq!("10".parse::<Command>(), Err(CommandError::OutOfRange(10)));
    }

    #[test]
    fn test_labels_and_keywords() {
        assert_eq!("Center".parse::<Command>(), Ok(Command::Place(Position::Center)));
        assert_eq!("UNDO".parse::<Command>(), Ok(Command::Undo));
        assert_eq!("n".parse::<Command>(), Ok(Command::NewRound));
        assert_eq!("reset".parse::<Command>(), Ok(Command::ResetScore));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "castle".parse::<Command>(),
            Err(CommandError::Unknown("castle".to_string()))
        );
    }
}
