//! Combined outcome evaluation.

use super::{check_winner, is_full};
use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// A completed line wins over everything; otherwise a full board is a
/// draw and anything else is still in progress (`None`).
#[instrument(skip(board), ret)]
pub fn evaluate_outcome(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        return Some(Outcome::Winner(winner));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
