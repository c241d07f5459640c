//! Tests for move list labels, ordering and the front-end view.

use timetravel_tictactoe::{GameState, ListOrder, Outcome, Position};

fn sample_game() -> GameState {
    GameState::replay(&[Position::TopLeft, Position::Center, Position::BottomRight])
}

#[test]
fn test_descriptions_ascending() {
    let game = sample_game();
    assert_eq!(
        game.move_descriptions(),
        vec![
            "Go to game start",
            "Go to move #1 | (1, 1)",
            "Go to move #2 | (2, 2)",
            "Go to move #3 | (3, 3)",
        ]
    );
}

#[test]
fn test_toggle_reverses_once_and_restores() {
    let mut game = sample_game();
    let ascending = game.move_descriptions();

    game.toggle_list_order();
    assert_eq!(game.list_order(), ListOrder::Descending);
    let mut descending = game.move_descriptions();
    descending.reverse();
    assert_eq!(descending, ascending);

    game.toggle_list_order();
    assert_eq!(game.list_order(), ListOrder::Ascending);
    assert_eq!(game.move_descriptions(), ascending);
}

#[test]
fn test_toggle_leaves_history_alone() {
    let mut game = sample_game();
    game.jump_to(1).unwrap();
    let history = game.history().to_vec();

    game.toggle_list_order();
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_step(), 1);
}

#[test]
fn test_move_list_keeps_step_indices_when_descending() {
    let mut game = sample_game();
    game.jump_to(2).unwrap();
    game.toggle_list_order();

    let entries = game.move_list();
    let steps: Vec<_> = entries.iter().map(|e| e.step).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);

    let highlighted: Vec<_> = entries.iter().filter(|e| e.highlighted).map(|e| e.step).collect();
    assert_eq!(highlighted, vec![2]);
}

#[test]
fn test_view_reflects_current_step() {
    let mut game = sample_game();
    game.jump_to(1).unwrap();

    let view = game.view();
    assert_eq!(view.board, *game.history()[1].board());
    assert_eq!(view.status, "Next player: O");
    assert_eq!(view.current_step, 1);
    assert_eq!(view.outcome, Outcome::InProgress);
    assert_eq!(view.list_order, ListOrder::Ascending);
    assert_eq!(view.toggle_label(), "Sort descending");
    assert_eq!(view.moves.len(), 4);
}

#[test]
fn test_view_serializes_for_front_ends() {
    let game = GameState::with_list_order(ListOrder::Descending);
    let json = serde_json::to_value(game.view()).unwrap();

    assert_eq!(json["list_order"], "descending");
    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["moves"][0]["label"], "Go to game start");
}
