//! Game outcome as seen after each move.

use super::rules::WinLine;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// State of a game after evaluating its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and at least one empty square.
    #[default]
    Ongoing,
    /// A mark completed a win line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// Board full with no winner.
    Draw,
}

impl Outcome {
    /// Returns true once the game can take no further moves.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if the game was won.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Won { mark, .. } => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw."),
        }
    }
}
