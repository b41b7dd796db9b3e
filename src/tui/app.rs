//! Application state for the presentation shell.

use tictactoe_tui::{Action, GameState, Position};
use tracing::debug;

/// Shell-side state: the current game plus the keyboard cursor.
///
/// The shell only holds the latest [`GameState`] and swaps it for the
/// successor the engine returns - it never touches board contents itself.
pub struct App {
    game: GameState,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the keyboard cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Dispatches an action into the engine and keeps the successor state.
    pub fn dispatch(&mut self, action: Action) {
        debug!(%action, "Dispatching action");
        self.game = self.game.apply(action);
    }
}
