//! Command-line interface for the tic-tac-toe TUI.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe for two players at one keyboard (or mouse)
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Terminal tic-tac-toe - click, type, or arrow your way to three in a row", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write tracing output to (the TUI owns the terminal, so logs
    /// go to a file; filter with RUST_LOG)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}
