//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; nothing here mutates state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Evaluates a board: first completed line wins, else full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Won { mark, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
