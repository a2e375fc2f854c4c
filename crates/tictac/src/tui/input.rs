//! Keyboard mapping.

use crate::orchestrator::Command;
use crossterm::event::KeyCode;
use tictac_engine::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor; handled locally.
    Cursor(Position),
    /// Forward to the orchestrator.
    Command(Command),
}

/// Maps a key to an action given the current cursor.
pub fn map_key(cursor: Position, key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(KeyAction::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Command(Command::Play(cursor))),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(|pos| KeyAction::Command(Command::Play(pos))),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Command(Command::Reset)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyAction::Command(Command::ClearScores)),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyAction::Command(Command::ToggleMode)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(KeyAction::Command(Command::Quit))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let idx = cursor.to_index();
    let (row, col) = (idx / 3, idx % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
