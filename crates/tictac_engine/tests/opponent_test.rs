//! Scenario tests for the heuristic opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_engine::{
    Board, ComputerOpponent, FirstCandidate, GameSession, Mark, NoLegalMove, Outcome, Position,
    RandomSource, ScoreTally, choose_move,
};

#[test]
fn test_blocks_open_row() {
    let board = Board::from("XX__O____");
    let pos = choose_move(&board, Mark::O, Mark::X, &mut FirstCandidate).unwrap();
    assert_eq!(pos.to_index(), 2);
}

#[test]
fn test_takes_win_over_block() {
    let board = Board::from("OO_______");
    let pos = choose_move(&board, Mark::O, Mark::X, &mut FirstCandidate).unwrap();
    assert_eq!(pos.to_index(), 2);
}

#[test]
fn test_empty_board_takes_center() {
    let board = Board::new();
    let pos = choose_move(&board, Mark::O, Mark::X, &mut FirstCandidate).unwrap();
    assert_eq!(pos.to_index(), 4);
}

#[test]
fn test_full_board_errors() {
    let board = Board::from("XOXXOOOXX");
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_move(&board, Mark::O, Mark::X, &mut rng), Err(NoLegalMove));
}

#[test]
fn test_corner_choice_is_uniform_over_open_corners() {
    let board = Board::from("____X____");
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let pos = choose_move(&board, Mark::O, Mark::X, &mut rng).unwrap();
        assert!(Position::CORNERS.contains(&pos));
        seen.insert(pos);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_always_returns_empty_square() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..100 {
        let mut session = GameSession::new();
        let mut x = ComputerOpponent::new(Mark::X, StdRng::seed_from_u64(rng.pick(1000) as u64));
        let mut o = ComputerOpponent::new(Mark::O, FirstCandidate);
        while !session.is_finished() {
            let mover = session.to_move();
            let pos = if mover == Mark::X {
                x.choose(session.board())
            } else {
                o.choose(session.board())
            }
            .unwrap();
            assert!(session.board().is_empty(pos));
            session.apply_move(pos.to_index(), mover).unwrap();
        }
    }
}

/// X→0, O→4, X→1, the policy blocks at 2, and the finished game is
/// counted exactly once.
#[test]
fn test_end_to_end_block_then_finish() {
    let mut session = GameSession::new();
    let mut tally = ScoreTally::new();
    let mut cpu = ComputerOpponent::new(Mark::O, FirstCandidate);

    session.apply_move(0, Mark::X).unwrap();
    let reply = cpu.choose(session.board()).unwrap();
    assert_eq!(reply, Position::Center);
    session.apply_move(reply.to_index(), Mark::O).unwrap();

    session.apply_move(1, Mark::X).unwrap();
    let reply = cpu.choose(session.board()).unwrap();
    assert_eq!(reply.to_index(), 2);
    session.apply_move(2, Mark::O).unwrap();

    // X blocks the anti-diagonal 2-4-6.
    session.apply_move(6, Mark::X).unwrap();

    let human = [3, 5, 7, 8];
    let mut human = human.iter();
    let mut recorded = 0;
    loop {
        if session.is_finished() {
            break;
        }
        let mover = session.to_move();
        let index = if mover == Mark::O {
            cpu.choose(session.board()).unwrap().to_index()
        } else {
            *human
                .by_ref()
                .find(|i| session.board().is_empty(Position::from_index(**i).unwrap()))
                .unwrap()
        };
        let outcome = session.apply_move(index, mover).unwrap();
        if outcome != Outcome::Ongoing && tally.record(&outcome) {
            recorded += 1;
        }
    }

    assert_eq!(recorded, 1);
    assert_eq!(tally.total(), 1);
}
