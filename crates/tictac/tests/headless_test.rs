//! Tests for computer-vs-computer runs.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac::run_headless;
use tictac_engine::FirstCandidate;

#[test]
fn test_every_game_is_counted() {
    let tally = run_headless(50, StdRng::seed_from_u64(1), StdRng::seed_from_u64(2));
    assert_eq!(tally.total(), 50);
}

#[test]
fn test_deterministic_sources_repeat_exactly() {
    let first = run_headless(5, FirstCandidate, FirstCandidate);
    let second = run_headless(5, FirstCandidate, FirstCandidate);
    assert_eq!(first, second);
    assert_eq!(first.total(), 5);
}

#[test]
fn test_zero_games() {
    let tally = run_headless(0, FirstCandidate, FirstCandidate);
    assert_eq!(tally.total(), 0);
}
