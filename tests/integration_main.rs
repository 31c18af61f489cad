use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use resonance_desk::app::config::UserConfig;
use resonance_desk::app::{inputs, App, View};
use resonance_desk::audio::{AudioBackend, DemoTrack, NullBackend, PlayerError};
use resonance_desk::booking::{BookingFocus, CONFIRMATION_MESSAGE, PLACEHOLDER_LABEL};
use resonance_desk::showcase::DetailView;
use chrono::{NaiveDate, NaiveTime};
use std::time::Duration;

/// Helper to create a test app instance (no audio device needed)
fn create_test_app() -> App {
    let config = UserConfig::default();
    App::new(&config)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Run enough ticks to drive all card animations to rest.
fn settle(app: &mut App) {
    for _ in 0..40 {
        app.on_tick(Duration::from_millis(16));
    }
}

/// Backend whose play() always fails, like a machine with no output device.
struct DeadBackend;

impl AudioBackend for DeadBackend {
    fn load(&mut self, _track: DemoTrack) {}

    fn play(&mut self) -> Result<(), PlayerError> {
        Err(PlayerError::Output("no device".to_string()))
    }

    fn pause(&mut self) {}
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert_eq!(app.view, View::Home);
    assert!(app.detail.is_none());
    assert!(!app.playback.is_playing);

    // "all" sentinel leads both filter bars
    assert_eq!(app.equipment_grid.filters()[0], "all");
    assert_eq!(app.portfolio_grid.filters()[0], "all");
}

#[test]
fn test_view_cycling_wraps() {
    let mut app = create_test_app();
    let mut backend = NullBackend;

    inputs::handle_event(key(KeyCode::Tab), &mut app, &mut backend);
    assert_eq!(app.view, View::Equipment);
    inputs::handle_event(key(KeyCode::BackTab), &mut app, &mut backend);
    assert_eq!(app.view, View::Home);
    inputs::handle_event(key(KeyCode::BackTab), &mut app, &mut backend);
    assert_eq!(app.view, View::Booking);
}

#[test]
fn test_equipment_filter_settles_to_category_subset() {
    let mut app = create_test_app();

    app.equipment_grid.apply_filter("consoles");
    settle(&mut app);
    assert_eq!(app.equipment_grid.layout_ids(), vec!["ssl-4000e"]);

    app.equipment_grid.apply_filter("all");
    settle(&mut app);
    assert_eq!(app.equipment_grid.layout_ids().len(), 3);
}

#[test]
fn test_unknown_detail_id_is_ignored() {
    let mut app = create_test_app();

    app.open_equipment_detail("flux-capacitor");
    assert!(app.detail.is_none());

    app.open_equipment_detail("neumann-u87");
    assert_eq!(
        app.detail,
        Some(DetailView::Equipment("neumann-u87".to_string()))
    );
}

#[test]
fn test_equipment_cta_jumps_to_booking_with_service_preselected() {
    let mut app = create_test_app();
    let mut backend = NullBackend;
    app.view = View::Equipment;
    app.open_equipment_detail("akg-c414");

    inputs::handle_event(key(KeyCode::Enter), &mut app, &mut backend);

    assert!(app.detail.is_none());
    assert_eq!(app.view, View::Booking);
    assert_eq!(app.booking.focus, BookingFocus::Calendar);
    assert_eq!(app.booking.form.value_of("service"), "recording");
}

#[test]
fn test_booking_rejects_date_only_submission() {
    let mut app = create_test_app();
    app.booking
        .select_date(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());

    app.submit_booking();

    // Prompt surfaced, selection untouched
    assert_eq!(
        app.toast.as_ref().map(|t| t.message.as_str()),
        Some("Please select a date and time for your booking.")
    );
    assert_eq!(
        app.booking.selection.date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap())
    );
    assert_eq!(app.booking.label(), PLACEHOLDER_LABEL);
}

#[test]
fn test_full_booking_submission_confirms_and_resets() {
    let mut app = create_test_app();
    app.booking
        .select_date(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    app.booking
        .select_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
    assert_eq!(app.booking.label(), "Monday, January 6, 2025 at 3:00 PM");

    app.booking.form.set_value("firstName", "Sarah");
    app.booking.form.set_value("lastName", "Moon");
    app.booking.form.set_value("email", "sarah@moon.music");
    app.booking.form.set_value("phone", "+1 (555) 123-4567");
    app.booking.form.set_value("service", "recording");

    app.submit_booking();

    assert_eq!(app.booking.notice.as_deref(), Some(CONFIRMATION_MESSAGE));
    assert_eq!(app.booking.label(), PLACEHOLDER_LABEL);
    assert!(app.booking.form.value_of("firstName").is_empty());
    assert_eq!(
        app.toast.as_ref().map(|t| t.message.as_str()),
        Some("✅ Booking request sent")
    );
}

#[test]
fn test_form_keys_type_and_blur_validate() {
    let mut app = create_test_app();
    let mut backend = NullBackend;
    app.view = View::Booking;
    app.booking.focus = BookingFocus::Form;

    inputs::handle_event(key(KeyCode::Char('S')), &mut app, &mut backend);
    inputs::handle_event(key(KeyCode::Char('a')), &mut app, &mut backend);
    assert_eq!(app.booking.form.value_of("firstName"), "Sa");

    // Leaving the empty email field two tabs later flags nothing yet;
    // leaving firstName with content passes
    inputs::handle_event(key(KeyCode::Tab), &mut app, &mut backend);
    assert!(!app.booking.form.field("firstName").unwrap().invalid);
    assert_eq!(app.booking.form.active_field().name, "lastName");

    // Blur an empty required field and it flags
    inputs::handle_event(key(KeyCode::Tab), &mut app, &mut backend);
    assert!(app.booking.form.field("lastName").unwrap().invalid);
}

#[test]
fn test_playback_failure_keeps_paused_state() {
    let mut app = create_test_app();
    let mut backend = DeadBackend;

    app.play(&mut backend);

    assert!(!app.playback.is_playing);
    assert!(app.toast.is_some());
}

#[test]
fn test_switch_track_restarts_playback() {
    let mut app = create_test_app();
    let mut backend = NullBackend;

    app.play(&mut backend);
    assert!(app.playback.is_playing);

    app.switch_track(&mut backend, DemoTrack::Acoustic);
    assert_eq!(app.playback.current_track, DemoTrack::Acoustic);
    assert!(app.playback.is_playing);
}

#[test]
fn test_focus_lost_pauses_playback() {
    let mut app = create_test_app();
    let mut backend = NullBackend;

    app.play(&mut backend);
    app.on_focus_lost(&mut backend);
    assert!(!app.playback.is_playing);
}

#[test]
fn test_toast_updates_in_place() {
    let mut app = create_test_app();

    app.show_toast("first");
    let shown_at = app.toast.as_ref().unwrap().start_time;

    app.show_toast("second");
    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.message, "second");
    assert_eq!(toast.start_time, shown_at);
}
