//! End-to-end key sequences through the application state.

use crossterm::event::KeyCode;
use tictac::tui::{App, AppAction, Screen};
use tictac_core::{GameMode, Marker, Outcome, Session};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        assert_eq!(app.handle_key(KeyCode::Char(c)), AppAction::Continue);
    }
}

#[test]
fn test_two_player_session_round_trip() {
    let mut app = App::new(Session::seeded(3));
    press(&mut app, "2");
    assert_eq!(app.session().mode(), Some(GameMode::TwoPlayer));

    // X takes the top row.
    press(&mut app, "14273");
    assert_eq!(app.session().outcome(), Outcome::Winner(Marker::X));

    // Further clicks are ignored.
    press(&mut app, "9");
    assert_eq!(app.session().board().occupied_count(), 5);

    // Reset: loser opens, stats kept.
    press(&mut app, "r");
    assert_eq!(app.session().to_move(), Marker::O);
    press(&mut app, "123456789");
    assert!(app.session().outcome().is_decided());

    press(&mut app, "e");
    assert_eq!(app.screen(), Screen::Stats);
    assert_eq!(app.session().stats().total(), 2);

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.screen(), Screen::ModeSelect);
    assert_eq!(app.session().stats().total(), 0);
}

#[test]
fn test_single_player_game_always_finishes() {
    for seed in 0..20 {
        let mut app = App::new(Session::seeded(seed));
        press(&mut app, "1");

        // Human always clicks the lowest empty square.
        while !app.session().outcome().is_decided() {
            let next = app.session().board().empty_positions()[0];
            let key = char::from_digit(next.to_index() as u32 + 1, 10).unwrap();
            press(&mut app, &key.to_string());
        }
        assert_eq!(app.session().stats().total(), 1);
    }
}
