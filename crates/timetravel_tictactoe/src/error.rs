//! Error and outcome types for game operations.

use serde::{Deserialize, Serialize};

/// Caller error: an index that cannot name a square or a history step, or
/// a restored state that could not have come from play.
///
/// These indicate a bug in the front-end, not a bad click, so they are
/// reported instead of ignored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Square index outside 0-8.
    #[display("Square index {} is out of range (must be 0-8)", _0)]
    PositionOutOfRange(usize),

    /// Step index past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// Serialized state that breaks a history invariant.
    #[display("Invalid game state: {}", _0)]
    InvalidState(String),
}

impl std::error::Error for GameError {}

/// What happened to a requested move.
///
/// Rejected moves leave the game untouched; this only reports why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and recorded.
    #[display("Placed")]
    Placed,
    /// The square already holds a mark.
    #[display("Square already occupied")]
    SquareOccupied,
    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_placed(self) -> bool {
        matches!(self, MoveOutcome::Placed)
    }
}
