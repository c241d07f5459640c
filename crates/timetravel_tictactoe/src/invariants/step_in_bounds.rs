//! Step pointer invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: the current step indexes an existing history record.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history record"
    }
}
