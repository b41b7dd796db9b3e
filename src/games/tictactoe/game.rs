//! Game state and the move transition.
//!
//! `GameState` holds exactly the board and the player to move. Whether the
//! game is over is never stored - it is re-derived from the board through
//! [`evaluate`] on every query, so the displayed status can never drift
//! from the board truth.

use super::action::Action;
use super::position::Position;
use super::rules::{self, Outcome};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Classifies the board as ongoing, won, or drawn.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Human-facing status, derived from the outcome.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Won(win) => Status::Winner(win.player()),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::Turn(self.current_player),
        }
    }

    /// Places the current player's mark at `pos` and flips the turn.
    ///
    /// The move is accepted only while the game is in progress and the
    /// square is empty. Anything else - clicking an occupied square,
    /// clicking after the game ended - returns the state unchanged. That
    /// is stray input to ignore, not a fault.
    #[instrument(skip(self), fields(position = %pos, player = %self.current_player))]
    pub fn apply_move(&self, pos: Position) -> GameState {
        if self.outcome() != Outcome::InProgress {
            debug!("move ignored: game is over");
            return self.clone();
        }
        if !self.board.is_empty(pos) {
            debug!("move ignored: square occupied");
            return self.clone();
        }

        let mut board = self.board.clone();
        board.set(pos, Square::Occupied(self.current_player));
        GameState {
            board,
            current_player: self.current_player.opponent(),
        }
    }

    /// Applies a user action and returns the successor state.
    ///
    /// `Restart` yields the canonical initial state unconditionally; it is
    /// the only way out of a finished game.
    pub fn apply(&self, action: Action) -> GameState {
        match action {
            Action::Play(pos) => self.apply_move(pos),
            Action::Restart => GameState::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-facing status line, recomputed from the state on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Game is ongoing; it is this player's turn.
    #[display("Player {}'s turn", _0)]
    Turn(Player),
    /// This player holds a line of three.
    #[display("Player {} wins", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw game")]
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(moves: &[usize]) -> GameState {
        moves.iter().fold(GameState::new(), |state, &index| {
            state.apply_move(Position::from_index(index).unwrap())
        })
    }

    #[test]
    fn test_first_move_center() {
        let state = GameState::new().apply_move(Position::Center);
        assert_eq!(
            state.board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();
        let mut expected = Player::X;
        for index in [4, 0, 8, 2, 6] {
            assert_eq!(state.current_player(), expected);
            state = state.apply_move(Position::from_index(index).unwrap());
            expected = expected.opponent();
        }
    }

    #[test]
    fn test_x_wins_top_row() {
        // X: 0, 1, 2 with O answering at 3, 4.
        let state = play_all(&[0, 3, 1, 4, 2]);
        match state.outcome() {
            Outcome::Won(win) => {
                assert_eq!(win.player(), Player::X);
                assert_eq!(
                    win.line(),
                    [Position::TopLeft, Position::TopCenter, Position::TopRight]
                );
            }
            other => panic!("expected win, got {:?}", other),
        }
        assert_eq!(state.status(), Status::Winner(Player::X));
    }

    #[test]
    fn test_full_game_draw() {
        let state = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.status(), Status::Draw);
        assert!(Position::valid_moves(state.board()).is_empty());
    }

    #[test]
    fn test_occupied_square_is_a_no_op() {
        let before = GameState::new().apply_move(Position::TopLeft);
        let after = before.apply_move(Position::TopLeft);
        assert_eq!(after, before);
    }

    #[test]
    fn test_moves_after_win_are_no_ops() {
        let won = play_all(&[0, 3, 1, 4, 2]);
        let poked = won.apply_move(Position::BottomRight);
        assert_eq!(poked, won);

        // Only restart leaves the terminal state.
        assert_eq!(poked.apply(Action::Restart), GameState::new());
    }

    #[test]
    fn test_restart_from_any_state() {
        assert_eq!(GameState::new().apply(Action::Restart), GameState::new());
        let mid = play_all(&[4, 0]);
        assert_eq!(mid.apply(Action::Restart), GameState::new());
        let drawn = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(drawn.apply(Action::Restart), GameState::new());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(GameState::new().status().to_string(), "Player X's turn");
        let after_one = GameState::new().apply_move(Position::Center);
        assert_eq!(after_one.status().to_string(), "Player O's turn");
        let won = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(won.status().to_string(), "Player X wins");
        let drawn = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(drawn.status().to_string(), "Draw game");
    }
}
