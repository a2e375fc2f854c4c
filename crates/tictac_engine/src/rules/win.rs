//! Win detection logic for tic-tac-toe.

use super::super::position::Position;
use super::super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight rows, columns or diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of the line.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Winning lines in scan order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first line (in [`WIN_LINES`] order) that it
/// fills, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from("XXX");
        assert_eq!(check_winner(&board), Some((Mark::X, WIN_LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from("__O_O_O__");
        assert_eq!(check_winner(&board), Some((Mark::O, WIN_LINES[7])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from("XX_");
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_indices_match_table() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, want) in WIN_LINES.iter().zip(expected) {
            assert_eq!(line.indices(), want);
        }
    }
}
