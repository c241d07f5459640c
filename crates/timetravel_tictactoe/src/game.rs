//! Game state with snapshot history and time travel.

use super::error::{GameError, MoveOutcome};
use super::history::{ListOrder, Move, MoveEntry};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::outcome::Outcome;
use super::rules::{check_winner, is_full};
use super::view::GameView;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state for one session.
///
/// History is a list of board snapshots; `current_step` points at the one
/// being shown and played from. The player on turn is derived from the step.
///
/// Deserialization re-checks the history invariants, so a restored state
/// is as sound as one built by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<Move>,
    current_step: usize,
    list_order: ListOrder,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Move>,
    current_step: usize,
    list_order: ListOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current_step: raw.current_step,
            list_order: raw.list_order,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejecting restored game state");
            GameError::InvalidState(descriptions)
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game with ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_list_order(ListOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_list_order(list_order: ListOrder) -> Self {
        Self {
            history: vec![Move::initial()],
            current_step: 0,
            list_order,
        }
    }

    /// Builds a game by playing `moves` from the start.
    ///
    /// Moves that would be ignored interactively are ignored here too.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        let mut game = Self::new();
        for &pos in moves {
            game.apply_move(pos);
        }
        game
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the record currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Current move-list order.
    pub fn list_order(&self) -> ListOrder {
        self.list_order
    }

    /// Record at the current step.
    pub fn current(&self) -> &Move {
        &self.history[self.current_step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player on turn at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.board())
    }

    /// Result of the game at the current step.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Winner(player),
            None if is_full(self.board()) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Places the next player's mark at `position`.
    ///
    /// Occupied squares and moves on a won board are ignored: the state is
    /// left exactly as it was. Any history past the current step is
    /// discarded before the new snapshot is appended.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Some(winner) = self.winner() {
            debug!(%winner, "Ignoring move on finished board");
            return MoveOutcome::GameOver;
        }

        if !self.board().is_empty(position) {
            debug!("Ignoring move on occupied square");
            return MoveOutcome::SquareOccupied;
        }

        let player = self.next_player();
        let board = self.board().with_mark(position, player);
        let number = self.current_step + 1;

        if self.history.len() > number {
            debug!(
                discarded = self.history.len() - number,
                "Discarding moves past current step"
            );
        }
        self.history.truncate(number);
        self.history.push(Move::placed(number, board, position));
        self.current_step = number;

        info!(%player, %position, step = number, "Move placed");
        self.debug_check_invariants();
        MoveOutcome::Placed
    }

    /// Places a mark by raw square index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PositionOutOfRange`] if `index` is not a square.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::from_index(index).ok_or(GameError::PositionOutOfRange(index))?;
        Ok(self.apply_move(position))
    }

    /// Moves the step pointer to `step` and highlights that record.
    ///
    /// History length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is past the end of
    /// history; the state is left untouched.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            warn!(len, "Jump target out of range");
            return Err(GameError::StepOutOfRange { step, len });
        }

        for (i, record) in self.history.iter_mut().enumerate() {
            record.set_highlighted(i == step);
        }
        self.current_step = step;

        info!(next_player = %self.next_player(), "Jumped to step");
        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move-list order. History is unaffected.
    #[instrument(skip(self), fields(from = %self.list_order))]
    pub fn toggle_list_order(&mut self) {
        self.list_order = self.list_order.toggled();
        debug!(to = %self.list_order, "List order toggled");
    }

    /// Starts over from the empty board, keeping the list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::with_list_order(self.list_order);
        info!("Game restarted");
    }

    /// Status line for the current step.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    /// History records in display order.
    pub fn ordered_history(&self) -> Box<dyn Iterator<Item = &Move> + '_> {
        match self.list_order {
            ListOrder::Ascending => Box::new(self.history.iter()),
            ListOrder::Descending => Box::new(self.history.iter().rev()),
        }
    }

    /// Labels for the move list, in display order.
    pub fn move_descriptions(&self) -> Vec<String> {
        self.ordered_history().map(Move::description).collect()
    }

    /// Move-list rows for the front-end, in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.ordered_history().map(MoveEntry::from).collect()
    }

    /// Everything a front-end needs to draw the current state.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn view(&self) -> GameView {
        GameView {
            board: *self.board(),
            status: self.status(),
            moves: self.move_list(),
            list_order: self.list_order,
            current_step: self.current_step,
            outcome: self.outcome(),
        }
    }

    /// Panics in debug builds if any history invariant is broken.
    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariant violated");
            panic!("History invariant violated: {}", descriptions);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn corrupt_step(&mut self, step: usize) {
        self.current_step = step;
    }

    pub(crate) fn corrupt_board(&mut self, step: usize, pos: Position, player: Player) {
        self.history[step]
            .board_mut()
            .set(pos, super::Square::Occupied(player));
    }

    pub(crate) fn corrupt_highlights(&mut self) {
        for record in &mut self.history {
            record.set_highlighted(true);
        }
    }
}
