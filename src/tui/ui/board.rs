//! Tic-tac-toe board rendering.

use super::super::app::App;
use tictactoe_tui::{Outcome, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use strum::IntoEnumIterator;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

// Three cell rows of height 3 with single separator rows between them;
// same shape horizontally.
const ROW_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Length(3),
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
    Constraint::Length(3),
];
const COL_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Percentage(33),
    Constraint::Length(1),
    Constraint::Percentage(33),
    Constraint::Length(1),
    Constraint::Percentage(34),
];

/// Screen rectangles of the nine cells, row-major.
///
/// `area` is the board region from [`super::layout`]. Mouse hit-testing
/// calls this with the same area the renderer gets, so clicks and pixels
/// agree.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ROW_CONSTRAINTS)
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row_index, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(COL_CONSTRAINTS)
            .split(row_area);
        for (col_index, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row_index * 3 + col_index] = col_area;
        }
    }
    cells
}

/// Renders the board: marks, grid lines, keyboard cursor, and the winning
/// line highlight when the game has been won.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ROW_CONSTRAINTS)
        .split(board_area);

    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(COL_CONSTRAINTS)
            .split(row_area);
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }

    let state = app.state();
    let outcome = state.outcome();
    let winning_line = match outcome {
        Outcome::Won(win) => Some(win.line()),
        _ => None,
    };
    let game_over = outcome != Outcome::InProgress;

    let cells = cell_rects(area);
    for (pos, cell) in Position::iter().zip(cells) {
        let square = state.board().get(pos);
        let in_win_line = winning_line.is_some_and(|line| line.contains(&pos));
        let is_cursor = !game_over && pos == app.cursor();
        render_square(f, cell, pos, square, in_win_line, is_cursor, game_over);
    }
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    pos: Position,
    square: Square,
    in_win_line: bool,
    is_cursor: bool,
    game_over: bool,
) {
    let (text, mut style) = match square {
        // A finished game takes no input, so the key hints go away.
        Square::Empty if game_over => (String::new(), Style::default()),
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if in_win_line {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
