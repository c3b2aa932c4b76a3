//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state, so the same board always evaluates to the same result.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::evaluate_outcome;
pub use win::{LINES, Line, check_winner, winning_line};
