//! Application state and logic.

use super::input::{KeyAction, map_key};
use crate::controller::Snapshot;
use crate::orchestrator::{Command, GameEvent};
use crossterm::event::KeyCode;
use tictac_engine::Position;
use tracing::debug;

/// What the UI shows between frames.
#[derive(Debug)]
pub struct App {
    snapshot: Snapshot,
    cursor: Position,
    message: Option<String>,
    thinking: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
            cursor: Position::Center,
            message: None,
            thinking: false,
        }
    }

    /// Latest state from the orchestrator.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status text: transient message, thinking notice, or the game status.
    pub fn status_message(&self) -> String {
        if self.thinking {
            return "Computer is thinking...".to_string();
        }
        match &self.message {
            Some(message) => format!("{} | {}", self.snapshot.status, message),
            None => self.snapshot.status.clone(),
        }
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Updated(snapshot) => {
                self.snapshot = snapshot;
                self.thinking = false;
                self.message = None;
            }
            GameEvent::ComputerThinking => self.thinking = true,
            GameEvent::Rejected(e) => self.message = Some(e.to_string()),
            // The outcome is already in the snapshot status.
            GameEvent::Finished(_) => {
                self.thinking = false;
                self.message = Some("Press 'r' to play again.".to_string());
            }
        }
    }

    /// Handles a key; returns the command to forward, if any.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match map_key(self.cursor, key)? {
            KeyAction::Cursor(pos) => {
                self.cursor = pos;
                None
            }
            KeyAction::Command(command) => Some(command),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerError;
    use tictac_engine::{InvalidMove, Outcome};

    #[test]
    fn test_cursor_keys_stay_local() {
        let mut app = App::new();
        assert_eq!(app.handle_key(KeyCode::Left), None);
        assert_eq!(app.cursor(), Position::MiddleLeft);
        assert_eq!(
            app.handle_key(KeyCode::Char(' ')),
            Some(Command::Play(Position::MiddleLeft))
        );
    }

    #[test]
    fn test_rejection_shows_until_next_update() {
        let mut app = App::new();
        app.handle_event(GameEvent::Rejected(ControllerError::InvalidMove(
            InvalidMove::SquareOccupied(Position::Center),
        )));
        assert!(app.status_message().contains("already occupied"));

        app.handle_event(GameEvent::Updated(Snapshot::default()));
        assert_eq!(app.status_message(), "Make your move!");
    }

    #[test]
    fn test_finished_prompt_does_not_repeat_outcome() {
        let mut app = App::new();
        app.handle_event(GameEvent::Updated(Snapshot {
            status: Outcome::Draw.to_string(),
            ..Snapshot::default()
        }));
        app.handle_event(GameEvent::Finished(Outcome::Draw));
        assert_eq!(app.status_message(), "It's a draw. | Press 'r' to play again.");
    }
}
