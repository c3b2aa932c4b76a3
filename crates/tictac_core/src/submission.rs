//! Result of offering a move to the widget.
//!
//! Invalid moves are not errors: the widget ignores them and leaves its
//! state untouched. The reason is reported so hosts can log it.

use crate::{Outcome, Position};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The cell already carries a mark.
    #[display("{} is already marked", _0)]
    CellOccupied(Position),

    /// An outcome is already set.
    #[display("game is already over")]
    GameOver,

    /// Row or column is outside `0..3`.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The move was applied. Carries the outcome it produced, if any.
    Accepted(Option<Outcome>),
    /// The move was ignored; state is unchanged.
    Ignored(Rejection),
}

impl Submission {
    /// True if the move changed the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }

    /// The rejection reason, if the move was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Submission::Accepted(_) => None,
            Submission::Ignored(reason) => Some(*reason),
        }
    }
}
