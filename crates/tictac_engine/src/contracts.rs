//! Board invariants checked after every accepted move.

use super::session::GameSession;
use super::types::{Board, Mark, Square};
use tracing::{instrument, warn};

/// Invariant: X moves first, so X-count minus O-count is 0 or 1.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true when the mark counts are consistent with X moving first.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: history length matches filled squares, and every recorded
/// move is still on the board.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Returns true when the history accounts for every occupied square.
    #[instrument(skip(session))]
    pub fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let filled = board
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();
        let history_len = session.history().len();

        let valid = filled == history_len
            && session
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.mark));
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

/// Asserts that all session invariants hold (panic on violation in debug builds).
#[instrument(skip(session))]
pub fn assert_invariants(session: &GameSession) {
    debug_assert!(
        BoardConsistent::holds(session.board()),
        "Board consistency violated"
    );
    debug_assert!(
        HistoryComplete::holds(session),
        "History completeness violated"
    );
}
