//! Board evaluation: win and draw classification.

mod draw;
mod win;

use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

pub use win::WIN_LINES;

/// A winning configuration: the player and the line of three they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    line: [Position; 3],
}

impl Win {
    /// Creates a new win record.
    pub fn new(player: Player, line: [Position; 3]) -> Self {
        Self { player, line }
    }

    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the winning line of three positions.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }
}

/// Derived classification of a board.
///
/// Never stored on the game state - callers re-derive it through
/// [`evaluate`] whenever they need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

/// Classifies a board as ongoing, won, or drawn.
///
/// Total over every board value: a partially filled board with no line of
/// three is `InProgress`, a full board with no line is `Draw`.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(win) = win::check_win(board) {
        return Outcome::Won(win);
    }
    if draw::is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
