//! Text rendering of engine state and transitions.

use crate::games::tictactoe::{Board, GameEngine, Mark, Position, Square, Transition, WinLine};

/// Status line shown before any move of the first round.
pub fn opening_status(engine: &GameEngine) -> String {
    turn_status(engine.current_player())
}

fn turn_status(mark: Mark) -> String {
    format!("Player {}'s turn", mark)
}

/// Status line for a transition, or `None` when the status should not change.
pub fn status_for(transition: &Transition, engine: &GameEngine) -> Option<String> {
    let status = match transition {
        Transition::MoveApplied { .. } => turn_status(engine.current_player()),
        Transition::WinDetected { mark, .. } => {
            format!("Player {} wins! Type 'new' to play again.", mark)
        }
        Transition::DrawDetected => "It's a draw! Type 'new' to play again.".to_string(),
        Transition::UndoApplied { .. } => {
            format!("{} (after undo)", turn_status(engine.current_player()))
        }
        Transition::RoundStarted { starter } => format!("New round! Player {} starts", starter),
        Transition::Ignored => return None,
    };
    Some(status)
}

/// Draws the board as a 3x3 grid.
///
/// Empty squares show their 1-based number. Squares on `highlight` are
/// bracketed.
pub fn render_board(board: &Board, highlight: Option<WinLine>) -> String {
    let cell = |pos: Position| {
        let symbol = match board.get(pos) {
            Square::Empty => (pos.to_index() + 1).to_string(),
            Square::Occupied(mark) => mark.to_string(),
        };
        if highlight.is_some_and(|line| line.contains(pos)) {
            format!("[{}]", symbol)
        } else {
            format!(" {} ", symbol)
        }
    };

    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| cell(*pos))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Board followed by the score line.
pub fn render_engine(engine: &GameEngine) -> String {
    format!(
        "{}\n{}",
        render_board(engine.board(), engine.winning_line()),
        engine.score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_numbers() {
        assert_eq!(
            render_board(&Board::new(), None),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut engine = GameEngine::new();
        for i in [4, 0, 2, 8, 6] {
            engine.apply_move(i);
        }
        assert_eq!(
            render_engine(&engine),
            " O | 2 |[X]\n---+---+---\n 4 |[X]| 6 \n---+---+---\n[X]| 8 | O \nScore — X: 1 | O: 0 | Draws: 0"
        );
    }

    #[test]
    fn test_status_messages() {
        let mut engine = GameEngine::new();
        assert_eq!(opening_status(&engine), "Player X's turn");

        let t = engine.apply_move(4);
        assert_eq!(status_for(&t, &engine).as_deref(), Some("Player O's turn"));

        let t = engine.apply_move(4);
        assert_eq!(status_for(&t, &engine), None);

        let t = engine.undo_move();
        assert_eq!(
            status_for(&t, &engine).as_deref(),
            Some("Player X's turn (after undo)")
        );

        let t = engine.new_round();
        assert_eq!(
            status_for(&t, &engine).as_deref(),
            Some("New round! Player O starts")
        );
    }
}
