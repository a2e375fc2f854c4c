//! Match controller: one session, the running tally, the mode and the
//! computer opponent, mutated only through explicit calls.

use crate::mode::GameMode;
use derive_more::{Display, Error, From};
use rand::rngs::StdRng;
use tictac_engine::{
    ComputerOpponent, GameSession, InvalidMove, Mark, NoLegalMove, Outcome, Position, RandomSource,
    ScoreTally,
};
use tracing::{debug, info, instrument, warn};

/// The human always plays X against the computer.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Errors raised while driving a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ControllerError {
    /// The engine refused the move.
    #[display("{}", _0)]
    InvalidMove(InvalidMove),
    /// The opponent had nowhere to play.
    #[display("{}", _0)]
    NoLegalMove(NoLegalMove),
    /// A computer move was requested when it is not the computer's turn.
    #[from(skip)]
    #[display("It is not the computer's turn")]
    NotComputerTurn,
}

/// Session, tally and mode for one player-facing table.
#[derive(Debug)]
pub struct MatchController<R = StdRng> {
    session: GameSession,
    tally: ScoreTally,
    mode: GameMode,
    computer: ComputerOpponent<R>,
}

impl<R: RandomSource> MatchController<R> {
    /// Creates a controller with an empty board and zeroed tally.
    #[instrument(skip(rng))]
    pub fn new(mode: GameMode, rng: R) -> Self {
        Self {
            session: GameSession::new(),
            tally: ScoreTally::new(),
            mode,
            computer: ComputerOpponent::new(COMPUTER_MARK, rng),
        }
    }

    /// Plays the current mover's mark at `position`.
    ///
    /// In computer mode the human may only move while it is X's turn.
    #[instrument(skip(self), fields(mode = ?self.mode, to_move = %self.session.to_move()))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, ControllerError> {
        let mark = self.session.to_move();
        if self.computer_to_move() {
            warn!(%position, "Human tried to move during the computer's turn");
            return Err(InvalidMove::WrongPlayer(mark).into());
        }
        self.apply(position, mark)
    }

    /// True when the computer should move next.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && !self.session.is_finished()
            && self.session.to_move() == self.computer.mark()
    }

    /// Lets the computer choose and play its move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<(Position, Outcome), ControllerError> {
        if !self.computer_to_move() {
            return Err(ControllerError::NotComputerTurn);
        }
        let position = self.computer.choose(self.session.board())?;
        let outcome = self.apply(position, self.computer.mark())?;
        Ok((position, outcome))
    }

    fn apply(&mut self, position: Position, mark: Mark) -> Result<Outcome, ControllerError> {
        let outcome = self.session.apply_move(position.to_index(), mark)?;
        // apply_move refuses finished sessions, so this fires once per game.
        if outcome.is_finished() {
            self.tally.record(&outcome);
            info!(%outcome, tally = %self.tally, "Game finished");
        }
        Ok(outcome)
    }

    /// Starts a new round. The tally is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Switches mode and starts a new round.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!(from = ?self.mode, to = ?mode, "Changing mode");
        self.mode = mode;
        self.session.reset();
    }

    /// Zeroes the tally without touching the session.
    #[instrument(skip(self))]
    pub fn clear_scores(&mut self) {
        self.tally.clear();
    }

    /// Current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Running tally.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match self.session.outcome() {
            Outcome::Ongoing if self.computer_to_move() => {
                format!("Turn: {} (computer)", self.session.to_move())
            }
            Outcome::Ongoing => format!("Turn: {}", self.session.to_move()),
            finished => finished.to_string(),
        }
    }

    /// Copies out everything the UI draws.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session.clone(),
            tally: self.tally,
            mode: self.mode,
            status: self.status_line(),
        }
    }
}

/// Read-only view of a controller at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The session.
    pub session: GameSession,
    /// The tally.
    pub tally: ScoreTally,
    /// The mode.
    pub mode: GameMode,
    /// Status line text.
    pub status: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            tally: ScoreTally::new(),
            mode: GameMode::default(),
            status: "Make your move!".to_string(),
        }
    }
}
