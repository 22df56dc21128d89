//! Application state and key handling.

use crossterm::event::KeyCode;
use strum::IntoEnumIterator;
use tictac_core::{GameMode, Outcome, Position, Session, TurnSummary};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};

/// Which view is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode prompt shown before the first move of a session.
    ModeSelect,
    /// The board.
    Board,
    /// Statistics panel over the board.
    Stats,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    mode_choice: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            mode_choice: 0,
            message: None,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Highlighted board cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mode highlighted in the prompt.
    pub fn mode_choice(&self) -> GameMode {
        GameMode::iter()
            .nth(self.mode_choice)
            .unwrap_or(GameMode::SinglePlayer)
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// View currently in front.
    pub fn screen(&self) -> Screen {
        if self.session.mode().is_none() {
            Screen::ModeSelect
        } else if self.session.stats_visible() {
            Screen::Stats
        } else {
            Screen::Board
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen()))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
            info!("User quit");
            return AppAction::Quit;
        }

        match self.screen() {
            Screen::ModeSelect => self.handle_mode_key(key),
            Screen::Board => self.handle_board_key(key),
            Screen::Stats => self.handle_stats_key(key),
        }
        AppAction::Continue
    }

    fn handle_mode_key(&mut self, key: KeyCode) {
        let count = GameMode::iter().count();
        match key {
            KeyCode::Up | KeyCode::Left => {
                self.mode_choice = (self.mode_choice + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                self.mode_choice = (self.mode_choice + 1) % count;
            }
            KeyCode::Char('1') => self.choose_mode(GameMode::SinglePlayer),
            KeyCode::Char('2') => self.choose_mode(GameMode::TwoPlayer),
            KeyCode::Enter => self.choose_mode(self.mode_choice()),
            _ => {}
        }
    }

    fn choose_mode(&mut self, mode: GameMode) {
        self.session.select_mode(mode);
        self.cursor = Position::Center;
        self.message = None;
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.session.end_game();
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
        }
    }

    fn handle_stats_key(&mut self, key: KeyCode) {
        if matches!(
            key,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C')
        ) {
            self.session.close_stats();
            self.mode_choice = 0;
            self.message = None;
        }
    }

    fn click(&mut self, pos: Position) {
        match self.session.play(pos.to_index()) {
            Ok(summary) => {
                debug!(human = %summary.human, outcome = ?summary.outcome, "Turn played");
                self.message = turn_message(&summary);
            }
            Err(e) => {
                warn!(error = %e, position = %pos, "Click ignored");
                self.message = Some(e.to_string());
            }
        }
    }

    fn reset(&mut self) {
        match self.session.reset_board() {
            Ok(Some(opening)) => {
                self.message = Some(format!("Computer opened at {}", opening.position));
            }
            Ok(None) => self.message = None,
            Err(e) => {
                warn!(error = %e, "Reset failed");
                self.message = Some(e.to_string());
            }
        }
        self.cursor = Position::Center;
    }
}

fn turn_message(summary: &TurnSummary) -> Option<String> {
    match (summary.computer, summary.outcome) {
        (Some(reply), Outcome::Winner(_)) => {
            Some(format!("Computer played {} and wins", reply.position))
        }
        (Some(reply), _) => Some(format!("Computer played {}", reply.position)),
        (None, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Marker;

    fn app() -> App {
        App::new(Session::seeded(5))
    }

    #[test]
    fn test_starts_at_mode_prompt() {
        let app = app();
        assert_eq!(app.screen(), Screen::ModeSelect);
        assert_eq!(app.mode_choice(), GameMode::SinglePlayer);
    }

    #[test]
    fn test_mode_selection_by_arrows() {
        let mut app = app();
        app.handle_key(KeyCode::Down);
        assert_eq!(app.mode_choice(), GameMode::TwoPlayer);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.mode_choice(), GameMode::SinglePlayer);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().mode(), Some(GameMode::TwoPlayer));
        assert_eq!(app.screen(), Screen::Board);
    }

    #[test]
    fn test_board_keys_before_mode_do_nothing() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.session().board().occupied_count(), 0);
    }

    #[test]
    fn test_cursor_click_places_marker() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        let board = app.session().board();
        assert_eq!(board.get(Position::TopCenter).marker(), Some(Marker::X));
        assert_eq!(app.session().to_move(), Marker::O);
    }

    #[test]
    fn test_digit_click_gets_computer_reply() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.session().board().occupied_count(), 2);
        assert!(app.message().unwrap().starts_with("Computer played"));
    }

    #[test]
    fn test_occupied_click_reports_and_changes_nothing() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.session().board().occupied_count(), 1);
        assert!(app.message().unwrap().contains("occupied"));
    }

    #[test]
    fn test_end_game_and_close_stats() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.session().outcome(), Outcome::Winner(Marker::X));

        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.screen(), Screen::Stats);
        assert_eq!(*app.session().stats().x_wins(), 1);

        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.screen(), Screen::ModeSelect);
        assert_eq!(app.session().stats().total(), 0);
    }

    #[test]
    fn test_reset_keeps_stats() {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.session().board().occupied_count(), 0);
        assert_eq!(app.session().to_move(), Marker::O);
        assert_eq!(*app.session().stats().x_wins(), 1);
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    }
}
