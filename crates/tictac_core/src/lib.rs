//! Tic-tac-toe game widget logic.
//!
//! This crate holds the state and rules of a single interactive board,
//! independent of any rendering framework.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Position`]
//! - **Rules**: pure outcome evaluation over a fixed table of 8 lines
//! - **Widget**: [`GameWidget`] owns board, turn and outcome and exposes
//!   `submit_move` and `reset`
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameStatus, GameWidget, Mark};
//!
//! let mut widget = GameWidget::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     let _ = widget.submit_move(row, col);
//! }
//! assert_eq!(widget.status(), GameStatus::Won(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod position;
pub mod rules;
mod submission;
mod types;
mod widget;

pub use outcome::{GameStatus, Outcome};
pub use position::Position;
pub use rules::evaluate_outcome;
pub use submission::{Rejection, Submission};
pub use types::{Board, Cell, Mark};
pub use widget::GameWidget;
