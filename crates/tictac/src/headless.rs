//! Computer-vs-computer runs without a terminal UI.

use tictac_engine::{ComputerOpponent, GameSession, Mark, RandomSource, ScoreTally};
use tracing::{debug, info, instrument};

/// Plays `games` rounds with the heuristic on both sides.
///
/// Each finished round is recorded once; the returned tally always
/// totals `games`.
#[instrument(skip(x_rng, o_rng))]
pub fn run_headless<R: RandomSource>(games: u32, x_rng: R, o_rng: R) -> ScoreTally {
    let mut x = ComputerOpponent::new(Mark::X, x_rng);
    let mut o = ComputerOpponent::new(Mark::O, o_rng);
    let mut session = GameSession::new();
    let mut tally = ScoreTally::new();

    for game in 0..games {
        session.reset();
        while !session.is_finished() {
            let mover = session.to_move();
            let player = if mover == Mark::X { &mut x } else { &mut o };
            let Ok(position) = player.choose(session.board()) else {
                break;
            };
            if session.apply_move(position.to_index(), mover).is_err() {
                break;
            }
        }
        tally.record(&session.outcome());
        debug!(
            game,
            outcome = %session.outcome(),
            board = %session.board().display(),
            "Round finished"
        );
    }

    info!(%tally, "Headless run complete");
    tally
}
