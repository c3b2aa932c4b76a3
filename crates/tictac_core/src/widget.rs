//! The game widget: board, turn and outcome behind two operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules::{Line, evaluate_outcome, winning_line};
use crate::{Board, Cell, GameStatus, Mark, Outcome, Position, Rejection, Submission};

/// Interactive tic-tac-toe board state.
///
/// All state is private and changes only through [`GameWidget::submit_move`]
/// (or [`GameWidget::submit_at`]) and [`GameWidget::reset`]. Rendering
/// reads it through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameWidget {
    board: Board,
    turn: Mark,
    outcome: Option<Outcome>,
    /// Styling override; has no effect on play.
    class: Option<String>,
}

impl GameWidget {
    /// Creates a widget with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::FIRST,
            outcome: None,
            class: None,
        }
    }

    /// Creates a widget carrying a style class.
    #[instrument(skip(class))]
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::new()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the outcome, or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the state-machine view of the game.
    pub fn status(&self) -> GameStatus {
        self.outcome.into()
    }

    /// Returns the style class.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Positions that would accept a move right now.
    pub fn free_positions(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            return Vec::new();
        }
        Position::free(&self.board)
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            Some(Outcome::Winner(_)) => winning_line(&self.board).map(|(_, line)| line),
            _ => None,
        }
    }

    /// Status text: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        match self.outcome {
            None => format!("Current Player: {}", self.turn),
            Some(Outcome::Winner(mark)) => format!("Player {} Wins!", mark),
            Some(Outcome::Draw) => "It's a Draw!".to_string(),
        }
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// Ignored without touching state when the coordinates are off the
    /// board, the cell is marked, or the game is over.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Submission {
        match Position::from_row_col(row, col) {
            Some(pos) => self.submit_at(pos),
            None => Self::ignore(Rejection::OutOfBounds { row, col }),
        }
    }

    /// Places the current mark at `pos`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn submit_at(&mut self, pos: Position) -> Submission {
        if self.outcome.is_some() {
            return Self::ignore(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Self::ignore(Rejection::CellOccupied(pos));
        }

        let mark = self.turn;
        self.board.set(pos, Cell::Marked(mark));
        debug!(%mark, position = %pos, "Move accepted");

        self.outcome = evaluate_outcome(&self.board);
        match self.outcome {
            Some(outcome) => info!(%outcome, "Game over"),
            None => self.turn = mark.opponent(),
        }

        Submission::Accepted(self.outcome)
    }

    /// Returns to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board = Board::new();
        self.turn = Mark::FIRST;
        self.outcome = None;
    }

    fn ignore(reason: Rejection) -> Submission {
        debug!(%reason, "Move ignored");
        Submission::Ignored(reason)
    }
}

impl Default for GameWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let widget = GameWidget::new();
        assert_eq!(widget.board(), &Board::new());
        assert_eq!(widget.turn(), Mark::X);
        assert_eq!(widget.outcome(), None);
        assert_eq!(widget.status(), GameStatus::InProgress);
        assert_eq!(widget.class(), None);
        assert_eq!(widget.free_positions().len(), 9);
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut widget = GameWidget::new();
        let result = widget.submit_move(1, 1);
        assert_eq!(result, Submission::Accepted(None));
        assert_eq!(widget.board().get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(widget.turn(), Mark::O);
        assert_eq!(widget.status_line(), "Current Player: O");
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut widget = GameWidget::new();
        let before = widget.clone();
        let result = widget.submit_move(0, 3);
        assert_eq!(
            result.rejection(),
            Some(Rejection::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(widget, before);
    }

    #[test]
    fn test_winning_line_reported_after_win() {
        let mut widget = GameWidget::new();
        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            let _ = widget.submit_move(row, col);
        }
        assert_eq!(widget.status(), GameStatus::Won(Mark::X));
        assert_eq!(
            widget.winning_line(),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
        assert!(widget.free_positions().is_empty());
        assert_eq!(widget.status_line(), "Player X Wins!");
    }

    #[test]
    fn test_reset_keeps_class() {
        let mut widget = GameWidget::with_class("mono");
        let _ = widget.submit_move(0, 0);
        widget.reset();
        assert_eq!(widget.class(), Some("mono"));
        assert_eq!(widget.board(), &Board::new());
        assert_eq!(widget.turn(), Mark::X);
    }
}
