//! Tic-tac-toe engine library.
//!
//! The engine is a pure state machine: [`GameState`] holds a 3x3 board and
//! the player to move, [`GameState::apply`] is the only transition, and
//! [`evaluate`] classifies any board as ongoing, won, or drawn. The
//! terminal shell in the binary renders states and feeds actions back in;
//! nothing in this library touches a terminal.
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{Action, GameState, Outcome, Position};
//!
//! let state = GameState::new()
//!     .apply(Action::Play(Position::Center))
//!     .apply(Action::Play(Position::TopLeft));
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Crate-level exports - game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, GameState, Outcome, Player, Position, Square, Status, WIN_LINES, Win, evaluate,
};
