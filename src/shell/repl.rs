//! Interactive line-oriented shell around a [`GameEngine`].

use super::command::{Command, CommandError, HELP};
use super::error::ShellError;
use super::render::{opening_status, render_engine, status_for};
use crate::config::ShellConfig;
use crate::games::tictactoe::{GameEngine, Transition};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const RESET_PROMPT: &str = "Reset the scoreboard? This won't affect the current round. [y/N] ";

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the shell.
    Quit,
}

/// Reads commands from `input`, drives the engine, writes the board to `output`.
pub struct Shell<R, W> {
    engine: GameEngine,
    config: ShellConfig,
    input: R,
    output: W,
    json: bool,
    status: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over a fresh engine.
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        let engine = GameEngine::new();
        let status = opening_status(&engine);
        Self {
            engine,
            config,
            input,
            output,
            json: false,
            status,
        }
    }

    /// Emit one JSON object per update instead of the text board.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Consumes the shell, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self), fields(json = self.json))]
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!("Shell started");
        if *self.config.show_help_on_start() && !self.json {
            writeln!(self.output, "{}", HELP)?;
        }
        self.render(None)?;

        while let Some(line) = self.read_line("> ")? {
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.dispatch(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(CommandError::Empty) => {}
                Err(err) => {
                    debug!(%err, "Unparseable input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }

        info!(score = %self.engine.score(), "Shell finished");
        Ok(())
    }

    /// Executes one command.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<Flow, ShellError> {
        let transition = match command {
            Command::Place(position) => self.engine.apply_move(position.to_index()),
            Command::Undo => self.engine.undo_move(),
            Command::NewRound => self.engine.new_round(),
            Command::ResetScore => {
                self.reset_score()?;
                return Ok(Flow::Continue);
            }
            Command::Show => {
                self.render(None)?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        match status_for(&transition, &self.engine) {
            Some(status) => {
                self.status = status;
                self.render(Some(&transition))?;
            }
            None if self.json => self.render(Some(&transition))?,
            None => debug!("Command ignored"),
        }
        Ok(Flow::Continue)
    }

    fn reset_score(&mut self) -> Result<(), ShellError> {
        // JSON clients confirm on their side; every input line gets one reply.
        let ask = *self.config.confirm_reset() && !self.json;
        if ask && !self.confirm(RESET_PROMPT)? {
            debug!("Score reset declined");
        } else {
            self.engine.reset_score();
        }
        self.render(None)
    }

    fn confirm(&mut self, question: &str) -> Result<bool, ShellError> {
        let answer = self.read_line(question)?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        if !self.json {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self, transition: Option<&Transition>) -> Result<(), ShellError> {
        if self.json {
            let update = serde_json::json!({
                "transition": transition,
                "status": self.status,
                "state": self.engine.snapshot(),
            });
            writeln!(self.output, "{}", serde_json::to_string(&update)?)?;
        } else {
            writeln!(self.output, "\n{}\n{}", render_engine(&self.engine), self.status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Score};
    use std::io::Cursor;

    fn shell(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        Shell::new(
            ShellConfig::new(true, false),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn test_dispatch_places_marks() {
        let mut shell = shell("");
        assert_eq!(
            shell.dispatch(Command::Place(Position::Center)).unwrap(),
            Flow::Continue
        );
        assert_eq!(shell.status(), "Player O's turn");
        assert_eq!(shell.engine().history(), &[Position::Center]);
    }

    #[test]
    fn test_ignored_move_keeps_status() {
        let mut shell = shell("");
        shell.dispatch(Command::Place(Position::Center)).unwrap();
        shell.dispatch(Command::Place(Position::Center)).unwrap();
        assert_eq!(shell.status(), "Player O's turn");
        assert_eq!(shell.engine().history().len(), 1);
    }

    #[test]
    fn test_reset_requires_yes() {
        let mut shell = shell("n\ny\n");
        for i in [4, 0, 2, 8, 6] {
            shell.engine.apply_move(i);
        }
        shell.dispatch(Command::ResetScore).unwrap();
        assert_eq!(shell.engine().score(), Score::new(1, 0, 0));
        shell.dispatch(Command::ResetScore).unwrap();
        assert_eq!(shell.engine().score(), Score::default());
    }

    #[test]
    fn test_quit_stops_dispatch() {
        let mut shell = shell("");
        assert_eq!(shell.dispatch(Command::Quit).unwrap(), Flow::Quit);
    }
}
