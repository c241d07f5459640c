//! Single square delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// The differing square is the record's `last_move`, it goes from empty to
/// the player on turn (X on odd move numbers), and move numbers equal their
/// index in history.
pub struct SingleSquareDeltaInvariant;

impl Invariant<GameState> for SingleSquareDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let numbered = history.iter().enumerate().all(|(i, m)| m.number() == i);

        numbered
            && history.windows(2).all(|pair| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(pos) = after.last_move() else {
                    return false;
                };

                let changed = before
                    .board()
                    .squares()
                    .iter()
                    .zip(after.board().squares())
                    .filter(|(a, b)| a != b)
                    .count();

                changed == 1
                    && before.board().get(pos) == Square::Empty
                    && after.board().get(pos) == Square::Occupied(Player::for_step(before.number()))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}
