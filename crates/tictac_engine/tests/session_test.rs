//! Tests for the game session state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tictac_engine::{
    Board, GameSession, InvalidMove, Mark, Move, Outcome, Position, Square, WIN_LINES, evaluate,
};

fn finished_by_x() -> GameSession {
    GameSession::replay(&[
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::BottomLeft),
        Move::new(Mark::X, Position::TopRight),
    ])
    .expect("Valid replay")
}

#[test]
fn test_new_session() {
    let session = GameSession::new();
    assert_eq!(session.to_move(), Mark::X);
    assert_eq!(session.outcome(), Outcome::Ongoing);
    assert_eq!(session.board(), &Board::new());
    assert!(session.history().is_empty());
}

#[test]
fn test_move_alternates_turn() {
    let mut session = GameSession::new();
    assert_eq!(session.apply_move(4, Mark::X), Ok(Outcome::Ongoing));
    assert_eq!(session.to_move(), Mark::O);
    assert_eq!(session.board().get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_wrong_player_rejected() {
    let mut session = GameSession::new();
    assert_eq!(session.apply_move(4, Mark::O), Err(InvalidMove::WrongPlayer(Mark::O)));

    session.apply_move(4, Mark::X).unwrap();
    assert_eq!(session.apply_move(0, Mark::X), Err(InvalidMove::WrongPlayer(Mark::X)));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_out_of_range_rejected() {
    let mut session = GameSession::new();
    assert_eq!(session.apply_move(9, Mark::X), Err(InvalidMove::OutOfRange(9)));
    assert_eq!(session, GameSession::new());
}

#[test]
fn test_occupied_rejected() {
    let mut session = GameSession::new();
    session.apply_move(0, Mark::X).unwrap();
    assert_eq!(
        session.apply_move(0, Mark::O),
        Err(InvalidMove::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(session.to_move(), Mark::O);
}

#[test]
fn test_win_detection() {
    let session = finished_by_x();
    assert_eq!(
        session.outcome(),
        Outcome::Won {
            mark: Mark::X,
            line: WIN_LINES[0],
        }
    );
    assert!(session.is_finished());
}

#[test]
fn test_finished_session_refuses_moves() {
    let mut session = finished_by_x();
    let before = session.board().clone();

    assert_eq!(session.apply_move(8, Mark::O), Err(InvalidMove::GameOver));
    assert_eq!(session.apply_move(8, Mark::X), Err(InvalidMove::GameOver));
    assert_eq!(session.board(), &before);
}

#[test]
fn test_draw_detection() {
    let session = GameSession::replay(&[
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
        Move::new(Mark::O, Position::TopCenter),
        Move::new(Mark::X, Position::BottomCenter),
        Move::new(Mark::O, Position::MiddleLeft),
        Move::new(Mark::X, Position::MiddleRight),
        Move::new(Mark::O, Position::BottomRight),
        Move::new(Mark::X, Position::BottomLeft),
    ])
    .expect("Valid replay");

    assert_eq!(session.outcome(), Outcome::Draw);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut session = finished_by_x();
    session.reset();
    assert_eq!(session, GameSession::new());

    let mut session = GameSession::new();
    session.apply_move(4, Mark::X).unwrap();
    session.reset();
    assert_eq!(session.to_move(), Mark::X);
    assert_eq!(session.outcome(), Outcome::Ongoing);
    assert!(session.board().squares().iter().all(|s| *s == Square::Empty));
}

/// Won iff some line is uniformly occupied; never both won and drawn.
#[test]
fn test_random_playouts_agree_with_line_scan() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..300 {
        let mut session = GameSession::new();
        while !session.is_finished() {
            let moves = session.valid_moves();
            let pos = *moves.choose(&mut rng).expect("ongoing game has moves");
            let mark = session.to_move();
            let outcome = session.apply_move(pos.to_index(), mark).expect("legal move");

            let board = session.board();
            let full_line = WIN_LINES.iter().any(|line| {
                let [a, b, c] = line.positions();
                board.get(a) != Square::Empty
                    && board.get(a) == board.get(b)
                    && board.get(b) == board.get(c)
            });

            assert_eq!(outcome, evaluate(board));
            assert_eq!(outcome.winner().is_some(), full_line);
            assert!(!(outcome.winner().is_some() && outcome.is_draw()));
            if outcome.is_draw() {
                assert!(board.is_full());
            }
        }
    }
}

#[test]
fn test_session_snapshot_restores_mid_game() {
    let mut session = GameSession::new();
    session.apply_move(4, Mark::X).unwrap();
    session.apply_move(0, Mark::O).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let mut restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
    assert_eq!(restored.apply_move(8, Mark::X), Ok(Outcome::Ongoing));
}

#[test]
fn test_tampered_snapshot_is_refused() {
    let mut session = GameSession::new();
    session.apply_move(4, Mark::X).unwrap();
    session.apply_move(0, Mark::O).unwrap();
    let stored = serde_json::to_value(&session).unwrap();

    let mut wrong_mover = stored.clone();
    wrong_mover["to_move"] = serde_json::to_value(Mark::O).unwrap();
    let err = serde_json::from_value::<GameSession>(wrong_mover).unwrap_err();
    assert!(err.to_string().contains("does not match its history"));

    // Board still shows O at 0, but the move is gone from history.
    let mut lost_move = stored.clone();
    lost_move["history"].as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<GameSession>(lost_move).is_err());

    let mut out_of_turn = stored;
    out_of_turn["history"].as_array_mut().unwrap().swap(0, 1);
    let err = serde_json::from_value::<GameSession>(out_of_turn).unwrap_err();
    assert!(err.to_string().contains("does not replay"));
}
