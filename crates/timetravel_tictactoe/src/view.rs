//! Read-only view handed to front-ends.

use super::outcome::Outcome;
use super::history::{ListOrder, MoveEntry};
use super::Board;
use serde::{Deserialize, Serialize};

/// Snapshot of what a front-end draws after each event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    pub board: Board,
    /// `"Winner: X"` or `"Next player: O"`.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Order of `moves`, for the toggle button label.
    pub list_order: ListOrder,
    /// Step currently shown.
    pub current_step: usize,
    /// Win/draw state at the current step.
    pub outcome: Outcome,
}

impl GameView {
    /// Label for the order toggle: names the order it switches to.
    pub fn toggle_label(&self) -> String {
        format!("Sort {}", self.list_order.toggled())
    }
}
