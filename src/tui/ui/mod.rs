//! UI rendering using ratatui.

pub mod board;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Fixed vertical regions of the screen.
pub struct Chunks {
    /// Title bar.
    pub title: Rect,
    /// Board region, filling the middle.
    pub board: Rect,
    /// Status bar.
    pub status: Rect,
    /// Key help bar.
    pub help: Rect,
}

/// Splits the frame area into the fixed vertical regions.
///
/// Input hit-testing uses the same split, so what the user clicks is
/// exactly what was drawn.
pub fn layout(area: Rect) -> Chunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    Chunks {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = layout(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks.title);

    board::render_board(f, chunks.board, app);

    // Recomputed from the board every frame, never cached.
    let status = Paragraph::new(app.state().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks.status);

    let help = Paragraph::new("Click or 1-9: place | Arrows + Enter: place | R: restart | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks.help);
}
