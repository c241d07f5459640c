//! Application state and key handling.

use crate::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use timetravel_tictactoe::{GameState, GameView, ListOrder, Position};
use tracing::{debug, error, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the move-list selection.
    MoveList,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::MoveList,
            Focus::MoveList => Focus::Board,
        }
    }
}

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row in the displayed move list, not a history step.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(list_order: ListOrder) -> Self {
        let mut app = Self {
            game: GameState::with_list_order(list_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        };
        app.select_current_step();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggled(),
            KeyCode::Char('o') => self.toggle_order(),
            KeyCode::Char('r') => {
                self.game.restart();
                self.select_current_step();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::MoveList => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::MoveList => self.move_selection(key),
            },
            _ => {}
        }
    }

    fn place(&mut self, pos: Position) {
        let outcome = self.game.apply_move(pos);
        if outcome.is_placed() {
            self.select_current_step();
        } else {
            debug!(%outcome, %pos, "Click ignored");
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.game.move_list().into_iter().nth(self.selected) else {
            return;
        };
        if let Err(e) = self.game.jump_to(entry.step) {
            error!(error = %e, "Move list out of sync with history");
        }
    }

    fn toggle_order(&mut self) {
        self.game.toggle_list_order();
        // Keep the same entry selected after the list flips.
        let last = self.game.history().len() - 1;
        self.selected = last - self.selected.min(last);
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    fn select_current_step(&mut self) {
        let step = self.game.current_step();
        self.selected = self
            .game
            .move_list()
            .iter()
            .position(|entry| entry.step == step)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = App::new(ListOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_enter_on_board_places_at_cursor() {
        let mut app = App::new(ListOrder::Ascending);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(app.game().current().last_move(), Some(Position::TopLeft));
    }

    #[test]
    fn test_jump_from_move_list() {
        let mut app = App::new(ListOrder::Ascending);
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')],
        );
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);

        assert_eq!(app.focus(), Focus::MoveList);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.view().status, "Next player: O");
    }

    #[test]
    fn test_toggle_keeps_selected_entry() {
        let mut app = App::new(ListOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        let step = app.game().move_list()[app.selected()].step;

        press(&mut app, &[KeyCode::Char('o')]);
        assert_eq!(app.game().list_order(), ListOrder::Descending);
        assert_eq!(app.game().move_list()[app.selected()].step, step);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(ListOrder::Descending);
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('r')]);
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().list_order(), ListOrder::Descending);

        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
