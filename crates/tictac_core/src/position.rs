//! Board positions and coordinate conversion.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Board;

/// A cell position on the board.
///
/// Discriminants follow row-major order, so `TopLeft` is index 0 and
/// `BottomRight` is index 8.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from row and column, each in `0..3`.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= Board::SIZE || col >= Board::SIZE {
            return None;
        }
        Self::from_index(row * Board::SIZE + col)
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.to_index() / Board::SIZE
    }

    /// Column of this position.
    pub fn col(self) -> usize {
        self.to_index() % Board::SIZE
    }

    /// Position one step in the given direction, clamped at the board edge.
    pub fn step(self, d_row: isize, d_col: isize) -> Self {
        let clamp = |v: usize, d: isize| {
            v.saturating_add_signed(d).min(Board::SIZE - 1)
        };
        let row = clamp(self.row(), d_row);
        let col = clamp(self.col(), d_col);
        Self::ALL[row * Board::SIZE + col]
    }

    /// Positions whose cell is still empty.
    #[instrument(skip(board))]
    pub fn free(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
