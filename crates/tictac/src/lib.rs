//! tictac - terminal tic-tac-toe
//!
//! Two people or one person against the computer, with a running score.
//!
//! # Architecture
//!
//! - **Engine**: rules, session and opponent live in `tictac_engine`
//! - **Controller**: session + tally + mode as one explicit object
//! - **Orchestrator**: async loop that serialises UI commands and owns the
//!   computer's thinking delay
//! - **TUI**: ratatui front end
//!
//! # Example
//!
//! ```
//! use tictac::{GameMode, MatchController};
//! use tictac_engine::{FirstCandidate, Outcome, Position};
//!
//! let mut table = MatchController::new(GameMode::HumanVsComputer, FirstCandidate);
//! table.play(Position::TopLeft).unwrap();
//! assert!(table.computer_to_move());
//! let (reply, outcome) = table.play_computer().unwrap();
//! assert_eq!(reply, Position::Center);
//! assert_eq!(outcome, Outcome::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod controller;
mod headless;
pub mod logging;
mod mode;
mod orchestrator;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use controller::{COMPUTER_MARK, ControllerError, MatchController, Snapshot};
pub use headless::run_headless;
pub use mode::GameMode;
pub use orchestrator::{Command, GameEvent, Orchestrator};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded generator when `seed` is set, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
