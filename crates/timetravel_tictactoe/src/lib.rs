//! Tic-tac-toe with time travel.
//!
//! The game is a list of board snapshots plus a step pointer. Every move
//! appends a snapshot; jumping moves the pointer without discarding
//! anything until the next move is made from an earlier step.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! for pos in [0, 4, 1, 3, 2] {
//!     game.apply_index(pos)?;
//! }
//! assert_eq!(game.status(), "Winner: X");
//!
//! game.jump_to(2)?;
//! assert_eq!(game.status(), "Next player: X");
//! game.apply_move(Position::MiddleLeft);
//! assert_eq!(game.history().len(), 4);
//! # Ok::<(), timetravel_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod outcome;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use error::{GameError, MoveOutcome};
pub use outcome::Outcome;
pub use game::GameState;
pub use history::{ListOrder, Move, MoveEntry};
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Player, Square};
pub use view::GameView;
