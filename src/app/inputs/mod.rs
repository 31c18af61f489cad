use crate::app::{App, View};
use crate::audio::AudioBackend;
use crate::booking::BookingFocus;
use crossterm::event::KeyEvent;

pub mod booking;
pub mod common;
pub mod detail;
pub mod player;
pub mod showcase;

/// Route one key press. Popups capture keys aggressively, so they are
/// checked first and consume the event when handled.
pub fn handle_event(key: KeyEvent, app: &mut App, backend: &mut dyn AudioBackend) {
    // 1. Detail popup swallows everything while open
    if app.detail.is_some() {
        detail::handle_detail_keys(key, app);
        return;
    }

    // 2. Form editing captures raw characters before any global binding
    if app.view == View::Booking && app.booking.focus == BookingFocus::Form {
        booking::handle_form_keys(key, app);
        return;
    }

    // 3. Global keys (quit, help, view switching)
    if common::handle_common_events(key, app) {
        return;
    }

    // 4. View-specific handlers
    match app.view {
        View::Home => player::handle_player_events(key, app, backend),
        View::Equipment => showcase::handle_showcase_events(key, app, showcase::Grid::Equipment),
        View::Portfolio => showcase::handle_showcase_events(key, app, showcase::Grid::Portfolio),
        View::Booking => booking::handle_booking_events(key, app),
    };
}
