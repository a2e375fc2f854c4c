//! Heuristic computer opponent.
//!
//! Fixed priority chain, first applicable rule wins:
//!
//! 1. complete a line of our own,
//! 2. block the opponent's line,
//! 3. take the center,
//! 4. take a random empty corner,
//! 5. take a random empty edge,
//! 6. take the first empty square.
//!
//! No look-ahead past one ply, so a player who sets up a fork can beat it.

use super::action::NoLegalMove;
use super::position::Position;
use super::random::RandomSource;
use super::rules::WIN_LINES;
use super::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// Which rule of the chain produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Reason {
    /// Completes a line for the mover.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Center square.
    Center,
    /// Random empty corner.
    Corner,
    /// Random empty edge.
    Edge,
    /// First empty square.
    Fallback,
}

/// Chooses a square for `self_mark` to play.
///
/// # Errors
///
/// Returns [`NoLegalMove`] if the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: RandomSource + ?Sized>(
    board: &Board,
    self_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Result<Position, NoLegalMove> {
    choose_move_with_reason(board, self_mark, opponent_mark, rng).map(|(pos, _)| pos)
}

/// Same as [`choose_move`], also reporting which rule fired.
pub fn choose_move_with_reason<R: RandomSource + ?Sized>(
    board: &Board,
    self_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Result<(Position, Reason), NoLegalMove> {
    if board.is_full() {
        return Err(NoLegalMove);
    }

    let (position, reason) = if let Some(pos) = completing_square(board, self_mark) {
        (pos, Reason::Win)
    } else if let Some(pos) = completing_square(board, opponent_mark) {
        (pos, Reason::Block)
    } else if board.is_empty(Position::Center) {
        (Position::Center, Reason::Center)
    } else if let Some(pos) = random_empty(board, &Position::CORNERS, rng) {
        (pos, Reason::Corner)
    } else if let Some(pos) = random_empty(board, &Position::EDGES, rng) {
        (pos, Reason::Edge)
    } else {
        let pos = Position::ALL
            .iter()
            .copied()
            .find(|p| board.is_empty(*p))
            .ok_or(NoLegalMove)?;
        (pos, Reason::Fallback)
    };

    debug!(%self_mark, %position, %reason, "Opponent chose move");
    Ok((position, reason))
}

/// First empty square (in line scan order) that would give `mark` three in a row.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    WIN_LINES.iter().find_map(|line| {
        let cells = line.positions();
        let owned = cells
            .iter()
            .filter(|p| board.get(**p) == Square::Occupied(mark))
            .count();
        let mut empty = cells.iter().copied().filter(|p| board.is_empty(*p));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

fn random_empty<R: RandomSource + ?Sized>(
    board: &Board,
    candidates: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let open: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|p| board.is_empty(*p))
        .collect();
    if open.is_empty() {
        return None;
    }
    open.get(rng.pick(open.len()).min(open.len() - 1)).copied()
}

/// A computer player: the heuristic bound to a mark and a random source.
#[derive(Debug, Clone)]
pub struct ComputerOpponent<R> {
    mark: Mark,
    rng: R,
}

impl<R: RandomSource> ComputerOpponent<R> {
    /// Creates an opponent playing `mark`.
    pub fn new(mark: Mark, rng: R) -> Self {
        Self { mark, rng }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Chooses the next square on `board`.
    pub fn choose(&mut self, board: &Board) -> Result<Position, NoLegalMove> {
        choose_move(board, self.mark, self.mark.opponent(), &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FirstCandidate;

    /// Replays a fixed list of picks.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            let next = self.0.remove(0);
            assert!(next < len, "scripted pick {} out of {}", next, len);
            next
        }
    }

    fn pick(layout: &str, me: Mark) -> (Position, Reason) {
        choose_move_with_reason(&Board::from(layout), me, me.opponent(), &mut FirstCandidate)
            .unwrap()
    }

    #[test]
    fn test_win_beats_block() {
        // O can win on the bottom row while X threatens the top row.
        assert_eq!(pick("XX_X__OO_", Mark::O), (Position::BottomRight, Reason::Win));
    }

    #[test]
    fn test_block() {
        assert_eq!(pick("XX__O____", Mark::O), (Position::TopRight, Reason::Block));
    }

    #[test]
    fn test_center_first() {
        assert_eq!(pick("X________", Mark::O), (Position::Center, Reason::Center));
    }

    #[test]
    fn test_corner_pick_uses_random_source() {
        let board = Board::from("X___O____");
        // open corners: TopRight, BottomLeft, BottomRight
        let mut rng = Scripted(vec![2]);
        let pos = choose_move(&board, Mark::X, Mark::O, &mut rng).unwrap();
        assert_eq!(pos, Position::BottomRight);
    }

    #[test]
    fn test_edge_when_corners_taken() {
        // X O X / _ X _ / O X O: no line is two-and-empty for either mark.
        let board = Board::from("XOX_X_OXO");
        let (pos, reason) =
            choose_move_with_reason(&board, Mark::O, Mark::X, &mut Scripted(vec![1])).unwrap();
        assert_eq!(reason, Reason::Edge);
        assert_eq!(pos, Position::MiddleRight);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from("XOXOXXOXO");
        assert_eq!(
            choose_move(&board, Mark::O, Mark::X, &mut FirstCandidate),
            Err(NoLegalMove)
        );
    }

    #[test]
    fn test_computer_opponent_plays_its_mark() {
        let mut cpu = ComputerOpponent::new(Mark::O, FirstCandidate);
        assert_eq!(cpu.mark(), Mark::O);
        assert_eq!(cpu.choose(&Board::from("OO_XX____")), Ok(Position::TopRight));
    }
}
