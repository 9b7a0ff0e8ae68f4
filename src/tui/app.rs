//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_rewind::{GameSession, Position};
use tracing::debug;

use super::input;

/// Interactive state: the session plus the cell cursor.
pub struct App {
    session: GameSession,
    cursor: Position,
}

impl App {
    /// Creates the app at game start with the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The cell the cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press.
    ///
    /// Arrows move the cell cursor, Enter/Space place at the cursor, digits
    /// place directly, `[` and `]` step through history.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char('[') => self.step_history(-1),
            KeyCode::Char(']') => self.step_history(1),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(position) = Position::from_index(c as usize - '1' as usize) {
                    self.place(position);
                }
            }
            _ => {}
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.session.reset();
    }

    fn place(&mut self, position: Position) {
        if let Err(e) = self.session.click(position) {
            debug!(error = %e, "move rejected");
        }
    }

    fn step_history(&mut self, delta: isize) {
        let cursor = self.session.history().cursor() as isize;
        let last = self.session.history().snapshots().len() as isize - 1;
        let target = (cursor + delta).clamp(0, last);
        if target != cursor {
            self.session.select(target as usize);
        }
    }
}
