//! First-class move values and the errors they can raise.
//!
//! Moves are domain events, not side effects. They record a mark's intent
//! and can be validated independently of execution.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// A move request the engine refused. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Mark),
}

/// The opponent policy was asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("No legal move: the board is full")]
pub struct NoLegalMove;
