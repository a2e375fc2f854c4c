//! Tic-tac-toe game engine.
//!
//! Pure game logic with no I/O:
//!
//! - **Rules**: win-line scan and draw detection ([`evaluate`])
//! - **Session**: validated, strictly alternating moves ([`GameSession`])
//! - **Opponent**: fixed-priority heuristic ([`choose_move`])
//! - **Tally**: win/draw counts across sessions ([`ScoreTally`])
//!
//! # Example
//!
//! ```
//! use tictac_engine::{choose_move, FirstCandidate, GameSession, Mark, Outcome};
//!
//! let mut session = GameSession::new();
//! session.apply_move(0, Mark::X).unwrap();
//! let reply = choose_move(session.board(), Mark::O, Mark::X, &mut FirstCandidate).unwrap();
//! assert_eq!(reply.to_index(), 4);
//! assert_eq!(session.apply_move(reply.to_index(), Mark::O), Ok(Outcome::Ongoing));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod opponent;
mod outcome;
mod position;
mod random;
pub mod rules;
mod session;
mod tally;
mod types;

pub use action::{InvalidMove, Move, NoLegalMove};
pub use contracts::{BoardConsistent, HistoryComplete};
pub use opponent::{ComputerOpponent, Reason, choose_move, choose_move_with_reason};
pub use outcome::Outcome;
pub use position::Position;
pub use random::{FirstCandidate, RandomSource};
pub use rules::{WIN_LINES, WinLine, evaluate};
pub use session::{CorruptSession, GameSession};
pub use tally::ScoreTally;
pub use types::{Board, Mark, Square};
