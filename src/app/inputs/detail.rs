use crate::app::{App, View};
use crate::booking::BookingFocus;
use crate::showcase::DetailView;
use crossterm::event::{KeyCode, KeyEvent};

/// Keys while the detail popup is open.
pub fn handle_detail_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_detail(),

        // Call-to-action row
        KeyCode::Enter => match app.detail.clone() {
            Some(DetailView::Equipment(_)) => {
                // Jump straight to the booking desk with the service primed
                app.close_detail();
                app.view = View::Booking;
                app.booking.focus = BookingFocus::Calendar;
                app.booking.form.set_value("service", "recording");
                app.show_toast("📅 Pick a date for your session");
            }
            Some(DetailView::Project(_)) => {
                app.show_toast("Streaming feature coming soon!");
            }
            None => {}
        },
        _ => {}
    }
}
