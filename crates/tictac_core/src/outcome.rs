//! Game outcome and status.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// Terminal classification of a game.
///
/// An ongoing game has no outcome; the widget stores `Option<Outcome>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// Board filled without a line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// State-machine view of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line; terminal until reset.
    Won(Mark),
    /// Board filled with no line; terminal until reset.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Option<Outcome>> for GameStatus {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => GameStatus::InProgress,
            Some(Outcome::Winner(mark)) => GameStatus::Won(mark),
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}
