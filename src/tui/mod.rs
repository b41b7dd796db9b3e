//! Terminal presentation shell for tic-tac-toe.
//!
//! The shell owns the terminal and the single [`App`] value. All state
//! transitions happen synchronously inside the event loop, one event at a
//! time, in arrival order.

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::ShellCommand;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tracing::info;

/// Runs the shell until the user quits.
///
/// Raw mode, the alternate screen, and mouse capture are torn down again
/// on both the ok and the error path.
pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Draw/input loop.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!("Shell running");

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) => input::map_key(key, app.cursor()),
            Event::Mouse(mouse) => {
                // Hit-test against the same geometry the renderer used.
                let size = terminal.size()?;
                let chunks = ui::layout(Rect::new(0, 0, size.width, size.height));
                let cells = ui::board::cell_rects(chunks.board);
                input::map_mouse(mouse, &cells)
            }
            _ => None,
        };

        match command {
            Some(ShellCommand::Game(action)) => app.dispatch(action),
            Some(ShellCommand::Cursor(pos)) => app.set_cursor(pos),
            Some(ShellCommand::Quit) => {
                info!("User quit");
                return Ok(());
            }
            None => {}
        }
    }
}
