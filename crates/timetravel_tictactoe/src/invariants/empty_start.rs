//! Empty start invariant: history opens with the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `history[0]` is move 0 on an empty board with no last move.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first().is_some_and(|first| {
            first.number() == 0 && first.last_move().is_none() && *first.board() == Board::new()
        })
    }

    fn description() -> &'static str {
        "History starts with move 0 on an empty board"
    }
}
