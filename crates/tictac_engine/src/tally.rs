//! Cumulative score across sessions.

use super::outcome::Outcome;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win/draw counts, kept only for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Returns `false` and does nothing for
    /// [`Outcome::Ongoing`].
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) -> bool {
        match outcome {
            Outcome::Ongoing => return false,
            Outcome::Won { mark: Mark::X, .. } => self.x_wins += 1,
            Outcome::Won { mark: Mark::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        debug!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Tally updated");
        true
    }

    /// Zeroes every counter.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Wins for the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Every recorded game.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}
