//! Input mapping: raw terminal events to shell commands.
//!
//! Keyboard and mouse both funnel into the same [`Action`] dispatch, so
//! the engine never sees crossterm types.

use tictactoe_tui::{Action, Position};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// What the shell should do with a raw terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forward an action to the game engine.
    Game(Action),
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Leave the application.
    Quit,
}

/// Maps a key event to a shell command.
///
/// Digits address cells directly (1-9, row-major), arrows move the cursor,
/// Enter or space activates the cursor's cell, `r` restarts, `q` quits.
pub fn map_key(key: KeyEvent, cursor: Position) -> Option<ShellCommand> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ShellCommand::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ShellCommand::Game(Action::Restart)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            let pos = Position::from_index(digit.checked_sub(1)?)?;
            Some(ShellCommand::Game(Action::Play(pos)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(ShellCommand::Game(Action::Play(cursor))),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(ShellCommand::Cursor(move_cursor(cursor, key.code)))
        }
        _ => None,
    }
}

/// Maps a mouse event to a shell command.
///
/// Only a left-button press over one of the nine cell rectangles counts;
/// everything else is ignored.
pub fn map_mouse(mouse: MouseEvent, cells: &[Rect; 9]) -> Option<ShellCommand> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    cell_at(cells, mouse.column, mouse.row).map(|pos| ShellCommand::Game(Action::Play(pos)))
}

/// Hit-tests a screen coordinate against the nine cell rectangles.
pub fn cell_at(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    cells.iter().enumerate().find_map(|(index, rect)| {
        let inside = column >= rect.x
            && column < rect.x.saturating_add(rect.width)
            && row >= rect.y
            && row < rect.y.saturating_add(rect.height);
        if inside {
            Position::from_index(index)
        } else {
            None
        }
    })
}

/// Moves the cursor one cell in the key's direction, clamped at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
