//! Tic-tac-toe engine: pure state transitions over a 3x3 board.

mod action;
mod game;
mod position;
mod rules;
mod types;

pub use action::Action;
pub use game::{GameState, Status};
pub use position::Position;
pub use rules::{Outcome, WIN_LINES, Win, evaluate};
pub use types::{Board, Player, Square};
