//! Highlight marker invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: at most one history record carries the highlight marker.
pub struct SingleHighlightInvariant;

impl Invariant<GameState> for SingleHighlightInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().filter(|m| m.is_highlighted()).count() <= 1
    }

    fn description() -> &'static str {
        "At most one history record is highlighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_repeated_jumps_keep_one_highlight() {
        let mut game = GameState::replay(&[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
        ]);
        for step in [3, 0, 2, 1, 1] {
            game.jump_to(step).unwrap();
            assert!(SingleHighlightInvariant::holds(&game));
        }
    }

    #[test]
    fn test_two_highlights_violate() {
        let mut game = GameState::replay(&[Position::Center]);
        game.corrupt_highlights();
        assert!(!SingleHighlightInvariant::holds(&game));
    }
}
