//! First-class input actions for tic-tac-toe.
//!
//! Every way the user can poke the game - clicking a cell, pressing a
//! digit, hitting the restart key - reduces to one of these actions
//! before it reaches the engine, keeping the dispatch independent of any
//! particular UI event model.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A user action the engine knows how to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the current player's mark at a position.
    Play(Position),
    /// Throw the game away and start over.
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.label()),
            Action::Restart => write!(f, "restart"),
        }
    }
}
