use crate::app::App;
use crate::booking::{BookingFocus, FieldKind, SERVICE_OPTIONS};
use crossterm::event::{KeyCode, KeyEvent};

/// Calendar and time-slot navigation (form focus is handled separately,
/// before global keys, because it captures raw characters).
pub fn handle_booking_events(key: KeyEvent, app: &mut App) -> bool {
    let desk = &mut app.booking;

    match desk.focus {
        BookingFocus::Calendar => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                desk.move_day(-1);
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                desk.move_day(1);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                desk.move_day(-7);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                desk.move_day(7);
                true
            }
            KeyCode::Enter => {
                desk.select_cursor_date();
                true
            }
            KeyCode::Tab => {
                desk.focus = BookingFocus::TimeSlots;
                true
            }
            KeyCode::BackTab => {
                desk.focus = BookingFocus::Form;
                true
            }
            KeyCode::Char('s') => {
                app.submit_booking();
                true
            }
            _ => false,
        },

        BookingFocus::TimeSlots => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                desk.move_slot(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                desk.move_slot(1);
                true
            }
            KeyCode::Enter => {
                desk.select_cursor_slot();
                true
            }
            KeyCode::Tab => {
                desk.focus = BookingFocus::Form;
                true
            }
            KeyCode::BackTab => {
                desk.focus = BookingFocus::Calendar;
                true
            }
            KeyCode::Char('s') => {
                app.submit_booking();
                true
            }
            _ => false,
        },

        // Reached via Tab cycling; actual editing goes through
        // handle_form_keys below.
        BookingFocus::Form => false,
    }
}

/// Form editing: every printable character lands in the active field, so
/// this runs before the global bindings.
pub fn handle_form_keys(key: KeyEvent, app: &mut App) {
    let desk = &mut app.booking;

    match key.code {
        KeyCode::Esc => desk.focus = BookingFocus::Calendar,

        // Leaving a field fires its blur validation
        KeyCode::Tab | KeyCode::Down => desk.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => desk.form.prev_field(),

        // Select fields cycle their options instead of taking typed text
        KeyCode::Left | KeyCode::Right
            if desk.form.active_field().kind == FieldKind::Select =>
        {
            let current = desk.form.active_field().value.clone();
            let pos = SERVICE_OPTIONS.iter().position(|o| *o == current);
            let next = match (key.code, pos) {
                (KeyCode::Right, Some(p)) => (p + 1) % SERVICE_OPTIONS.len(),
                (KeyCode::Left, Some(p)) => (p + SERVICE_OPTIONS.len() - 1) % SERVICE_OPTIONS.len(),
                _ => 0,
            };
            let option = SERVICE_OPTIONS[next];
            desk.form.active_field_mut().value = option.to_string();
            desk.form.active_field_mut().invalid = false;
        }

        KeyCode::Backspace => desk.form.active_field_mut().on_backspace(),
        KeyCode::Enter => app.submit_booking(),
        KeyCode::Char(c) => desk.form.active_field_mut().on_input(c),
        _ => {}
    }
}
