use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        // Close popups first, then quit (Neovim-style)
        KeyCode::Char('q') => {
            if app.show_keyhints {
                app.show_keyhints = false;
            } else {
                app.is_running = false;
            }
            true
        }
        KeyCode::Char('?') => {
            app.show_keyhints = !app.show_keyhints;
            true
        }
        KeyCode::Esc if app.show_keyhints => {
            app.show_keyhints = false;
            true
        }

        // View switching. Tab is pane cycling inside Booking, so the cycle
        // keys step aside there; the uppercase jumps always work.
        KeyCode::Tab if app.view != View::Booking => {
            app.view = app.view.next();
            true
        }
        KeyCode::BackTab if app.view != View::Booking => {
            app.view = app.view.prev();
            true
        }
        KeyCode::Char('H') => {
            app.view = View::Home;
            true
        }
        KeyCode::Char('E') => {
            app.view = View::Equipment;
            true
        }
        KeyCode::Char('P') => {
            app.view = View::Portfolio;
            true
        }
        KeyCode::Char('B') => {
            app.view = View::Booking;
            true
        }
        _ => false,
    }
}
