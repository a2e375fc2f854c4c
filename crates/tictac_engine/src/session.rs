//! Mutable game session: board, mover, outcome, history.
//!
//! A session has two macro-states. While the outcome is
//! [`Outcome::Ongoing`] it accepts moves for the expected mover, strictly
//! alternating X, O, X... Once a move completes a line or fills the board
//! the session is finished and refuses every move until [`GameSession::reset`].

use super::action::{InvalidMove, Move};
use super::contracts::assert_invariants;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Mark, Square};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A stored session whose state cannot be reached by its own history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum CorruptSession {
    /// A recorded move is illegal.
    #[display("Recorded history does not replay: {}", _0)]
    Replay(InvalidMove),
    /// Board, mover or outcome disagree with the replayed history.
    #[from(skip)]
    #[display("Stored state does not match its history")]
    Mismatch,
}

/// Wire shape of a session, checked before it becomes a [`GameSession`].
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = CorruptSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self::replay(&record.history)?;
        if session.board != record.board
            || session.to_move != record.to_move
            || session.outcome != record.outcome
        {
            return Err(CorruptSession::Mismatch);
        }
        Ok(session)
    }
}

/// One game's mutable state.
///
/// Deserializing replays the stored history, so a loaded session always
/// satisfies the board invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Places `mark` at `index` and returns the post-move outcome.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is finished, `index` is not in
    /// 0-8, the square is occupied, or `mark` is not the expected mover.
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<Outcome, InvalidMove> {
        if self.outcome.is_finished() {
            return Err(InvalidMove::GameOver);
        }

        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;

        if !self.board.is_empty(position) {
            return Err(InvalidMove::SquareOccupied(position));
        }

        if mark != self.to_move {
            return Err(InvalidMove::WrongPlayer(mark));
        }

        self.board.set(position, Square::Occupied(mark));
        self.history.push(Move::new(mark, position));
        self.to_move = mark.opponent();
        self.outcome = rules::evaluate(&self.board);

        assert_invariants(self);

        match self.outcome {
            Outcome::Ongoing => debug!(%mark, %position, "Move applied"),
            outcome => info!(%mark, %position, %outcome, "Move finished the game"),
        }

        Ok(self.outcome)
    }

    /// Applies a [`Move`] value.
    pub fn apply(&mut self, action: Move) -> Result<Outcome, InvalidMove> {
        self.apply_move(action.position.to_index(), action.mark)
    }

    /// Clears the board, sets X to move and the outcome to ongoing.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        *self = Self::new();
    }

    /// Replays moves on a fresh session.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, InvalidMove> {
        let mut session = Self::new();
        for action in moves {
            session.apply(*action)?;
        }
        Ok(session)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark expected to move next.
    ///
    /// After the game finishes this is the mark that would have moved next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions, or none once finished.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_finished() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
