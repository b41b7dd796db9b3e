//! Tests for the game state machine through the public API.

use tictactoe_tui::{Action, GameState, Outcome, Player, Position, Square, Status};

fn play_all(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &index| {
        state.apply(Action::Play(Position::from_index(index).unwrap()))
    })
}

#[test]
fn test_fresh_game() {
    let state = GameState::new();
    assert_eq!(state.current_player(), Player::X);
    assert!(
        state
            .board()
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    );
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert_eq!(state.status(), Status::Turn(Player::X));
}

#[test]
fn test_first_move_marks_and_flips() {
    let state = GameState::new().apply(Action::Play(Position::Center));
    assert_eq!(
        state.board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_x_wins_with_top_row() {
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
}

#[test]
fn test_draw_sequence_fills_the_board() {
    // X:0 O:1 X:2 O:4 X:3 O:5 X:7 O:6 X:8
    let state = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.outcome(), Outcome::Draw);
    assert!(
        state
            .board()
            .squares()
            .iter()
            .all(|s| *s != Square::Empty)
    );
}

#[test]
fn test_replaying_a_square_changes_nothing() {
    let before = play_all(&[0]);
    // O tries the same square, then X does too.
    let after = before
        .apply(Action::Play(Position::TopLeft))
        .apply(Action::Play(Position::TopLeft));
    assert_eq!(after, before);
}

#[test]
fn test_finished_game_ignores_every_move() {
    let won = play_all(&[0, 3, 1, 4, 2]);
    for index in 0..9 {
        let poked = won.apply(Action::Play(Position::from_index(index).unwrap()));
        assert_eq!(poked, won);
    }
}

#[test]
fn test_restart_always_yields_the_initial_state() {
    let fresh = GameState::new();
    for state in [
        GameState::new(),
        play_all(&[4]),
        play_all(&[0, 3, 1, 4, 2]),
        play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]),
    ] {
        assert_eq!(state.apply(Action::Restart), fresh);
    }
}

#[test]
fn test_state_survives_a_serde_round_trip() {
    let state = play_all(&[4, 0, 8]);
    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.outcome(), state.outcome());
}
