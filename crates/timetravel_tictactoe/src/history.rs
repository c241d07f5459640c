//! History records for time travel.
//!
//! Each [`Move`] is an immutable snapshot of the board right after a mark
//! was placed. The first record is always the empty starting board.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// One entry in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    number: usize,
    board: Board,
    last_move: Option<Position>,
    highlighted: bool,
}

impl Move {
    /// The opening record: move number 0 on an empty board.
    pub fn initial() -> Self {
        Self {
            number: 0,
            board: Board::new(),
            last_move: None,
            highlighted: false,
        }
    }

    /// Creates the record for a mark placed at `position`.
    pub(crate) fn placed(number: usize, board: Board, position: Position) -> Self {
        Self {
            number,
            board,
            last_move: Some(position),
            highlighted: false,
        }
    }

    /// Move number; equals the record's index in history.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Board snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square marked by this move, `None` for the starting board.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Whether this record was the target of the last jump.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Player who made this move.
    pub fn player(&self) -> Option<Player> {
        self.last_move.and_then(|pos| self.board.get(pos).player())
    }

    /// Label shown in the move list.
    pub fn description(&self) -> String {
        match self.last_move {
            None => "Go to game start".to_string(),
            Some(pos) => {
                let (row, col) = pos.coordinates();
                format!("Go to move #{} | ({}, {})", self.number, row, col)
            }
        }
    }
}

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl ListOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            ListOrder::Ascending => ListOrder::Descending,
            ListOrder::Descending => ListOrder::Ascending,
        }
    }
}

/// A move-list row as handed to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Text of the entry.
    pub label: String,
    /// History index to pass back to `jump_to`.
    pub step: usize,
    /// Whether this entry was the last jump target.
    pub highlighted: bool,
}

impl From<&Move> for MoveEntry {
    fn from(record: &Move) -> Self {
        Self {
            label: record.description(),
            step: record.number(),
            highlighted: record.is_highlighted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_initial_description() {
        assert_eq!(Move::initial().description(), "Go to game start");
        assert_eq!(Move::initial().player(), None);
    }

    #[test]
    fn test_placed_description_uses_row_and_col() {
        let board = Board::new().with_mark(Position::MiddleRight, Player::O);
        let record = Move::placed(2, board, Position::MiddleRight);
        assert_eq!(record.description(), "Go to move #2 | (2, 3)");
        assert_eq!(record.player(), Some(Player::O));
    }

    #[test]
    fn test_list_order_parses_lowercase() {
        assert_eq!(ListOrder::from_str("descending"), Ok(ListOrder::Descending));
        assert_eq!(ListOrder::Ascending.to_string(), "ascending");
        assert_eq!(ListOrder::Ascending.toggled().toggled(), ListOrder::Ascending);
    }
}
