//! Session booking: date/time selection state machine, the booking form,
//! and submission to an external sink (a log sink in this build).

pub mod form;

pub use form::{BookingForm, FieldKind, FormField, SERVICE_OPTIONS};

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Bookable slots shown in the time grid.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

pub const PLACEHOLDER_LABEL: &str = "Please select date and time";

pub const CONFIRMATION_MESSAGE: &str = "Thank you for your booking request! \
    We will contact you within 24 hours to confirm your session details.";

/// At most one date and one time selected at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSelection {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStage {
    NoSelection,
    DateOnly,
    TimeOnly,
    Complete,
}

impl BookingSelection {
    pub fn stage(&self) -> SelectionStage {
        match (self.date, self.time) {
            (None, None) => SelectionStage::NoSelection,
            (Some(_), None) => SelectionStage::DateOnly,
            (None, Some(_)) => SelectionStage::TimeOnly,
            (Some(_), Some(_)) => SelectionStage::Complete,
        }
    }

    /// Human-readable combined label, e.g.
    /// "Monday, January 6, 2025 at 3:00 PM". Placeholder until complete.
    pub fn label(&self) -> String {
        match (self.date, self.time) {
            (Some(date), Some(time)) => format!(
                "{} at {}",
                date.format("%A, %B %-d, %Y"),
                time.format("%-I:%M %p")
            ),
            _ => PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Payload handed to the submission sink. Key names follow the studio's
/// booking API draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub date: String,
    pub time: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub artist_name: String,
    pub service: String,
    pub description: String,
    pub duration: String,
    pub requests: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please select a date and time for your booking.")]
    SelectionIncomplete,
}

/// External collaborator that accepts a booking record. The shipped impl
/// logs the payload; a network sink would slot in here.
pub trait BookingSink {
    fn deliver(&self, record: &BookingRecord) -> anyhow::Result<()>;
}

/// Serializes the record and emits it as a single log event.
#[derive(Default)]
pub struct LogSink;

impl BookingSink for LogSink {
    fn deliver(&self, record: &BookingRecord) -> anyhow::Result<()> {
        let payload = serde_json::to_string(record)?;
        info!(target: "booking", %payload, "booking submitted");
        Ok(())
    }
}

/// Which pane of the booking view has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFocus {
    #[default]
    Calendar,
    TimeSlots,
    Form,
}

/// The booking desk: calendar cursor, slot cursor, form, selection, and the
/// inline confirmation / prompt line.
pub struct BookingDesk {
    pub selection: BookingSelection,
    pub form: BookingForm,
    pub focus: BookingFocus,

    /// Day the calendar cursor sits on; also defines the displayed month.
    pub cursor_day: NaiveDate,
    pub cursor_slot: usize,

    /// Confirmation or prompt shown under the form.
    pub notice: Option<String>,
}

impl BookingDesk {
    pub fn new() -> Self {
        Self::starting_from(Local::now().date_naive())
    }

    /// Test seam: start the calendar on a known day.
    pub fn starting_from(today: NaiveDate) -> Self {
        Self {
            selection: BookingSelection::default(),
            form: BookingForm::new(),
            focus: BookingFocus::default(),
            cursor_day: today,
            cursor_slot: 0,
            notice: None,
        }
    }

    // --- calendar / slot navigation ---

    pub fn move_day(&mut self, days: i64) {
        self.cursor_day = self.cursor_day + Duration::days(days);
    }

    pub fn move_slot(&mut self, delta: isize) {
        let len = TIME_SLOTS.len() as isize;
        let next = (self.cursor_slot as isize + delta).rem_euclid(len);
        self.cursor_slot = next as usize;
    }

    /// First day of the month the cursor is in (anchor for the grid).
    pub fn visible_month(&self) -> NaiveDate {
        self.cursor_day.with_day(1).unwrap_or(self.cursor_day)
    }

    // --- selection ---

    /// Selecting a date replaces any previous one.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selection.date = Some(date);
        self.notice = None;
    }

    pub fn select_time(&mut self, time: NaiveTime) {
        self.selection.time = Some(time);
        self.notice = None;
    }

    pub fn select_cursor_date(&mut self) {
        self.select_date(self.cursor_day);
    }

    pub fn select_cursor_slot(&mut self) {
        if let Ok(time) = NaiveTime::parse_from_str(TIME_SLOTS[self.cursor_slot], "%H:%M") {
            self.select_time(time);
        }
    }

    pub fn label(&self) -> String {
        self.selection.label()
    }

    // --- submission ---

    /// Submit the booking. Incomplete selection aborts with a user-facing
    /// prompt and mutates nothing. On success the record goes to the sink,
    /// the confirmation shows, and selection + form reset.
    pub fn submit(&mut self, sink: &dyn BookingSink) -> Result<BookingRecord, SubmitError> {
        let (date, time) = match (self.selection.date, self.selection.time) {
            (Some(d), Some(t)) => (d, t),
            _ => {
                self.notice = Some(SubmitError::SelectionIncomplete.to_string());
                return Err(SubmitError::SelectionIncomplete);
            }
        };

        let record = BookingRecord {
            date: date.format("%Y-%m-%d").to_string(),
            time: time.format("%H:%M").to_string(),
            first_name: self.form.value_of("firstName"),
            last_name: self.form.value_of("lastName"),
            email: self.form.value_of("email"),
            phone: self.form.value_of("phone"),
            artist_name: self.form.value_of("artistName"),
            service: self.form.value_of("service"),
            description: self.form.value_of("description"),
            duration: self.form.value_of("duration"),
            requests: self.form.value_of("requests"),
        };

        // Delivery cannot fail in this build; if a future sink does, the
        // booking is still treated as submitted and the failure logged.
        if let Err(e) = sink.deliver(&record) {
            warn!("booking sink rejected record: {e:#}");
        }

        self.notice = Some(CONFIRMATION_MESSAGE.to_string());
        self.selection = BookingSelection::default();
        self.form.clear();
        Ok(record)
    }
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CapturingSink {
        delivered: RefCell<Vec<BookingRecord>>,
    }

    impl CapturingSink {
        fn new() -> Self {
            Self {
                delivered: RefCell::new(Vec::new()),
            }
        }
    }

    impl BookingSink for CapturingSink {
        fn deliver(&self, record: &BookingRecord) -> anyhow::Result<()> {
            self.delivered.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn label_placeholder_until_both_selected() {
        let mut desk = BookingDesk::starting_from(date(2025, 1, 1));
        assert_eq!(desk.label(), PLACEHOLDER_LABEL);

        desk.select_date(date(2025, 1, 6));
        assert_eq!(desk.label(), PLACEHOLDER_LABEL);
        assert_eq!(desk.selection.stage(), SelectionStage::DateOnly);

        desk.select_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(desk.label(), "Monday, January 6, 2025 at 3:00 PM");
        assert_eq!(desk.selection.stage(), SelectionStage::Complete);
    }

    #[test]
    fn submit_with_date_only_is_rejected_without_state_change() {
        let mut desk = BookingDesk::starting_from(date(2025, 1, 1));
        desk.select_date(date(2025, 1, 6));
        desk.form.set_value("firstName", "Sarah");

        let sink = CapturingSink::new();
        let err = desk.submit(&sink).unwrap_err();
        assert_eq!(err, SubmitError::SelectionIncomplete);
        assert!(sink.delivered.borrow().is_empty());

        // Selection and form untouched; time still unset
        assert_eq!(desk.selection.date, Some(date(2025, 1, 6)));
        assert_eq!(desk.selection.time, None);
        assert_eq!(desk.form.value_of("firstName"), "Sarah");
        assert_eq!(desk.notice.as_deref(), Some(err.to_string()).as_deref());
    }

    #[test]
    fn successful_submit_delivers_resets_and_confirms() {
        let mut desk = BookingDesk::starting_from(date(2025, 1, 1));
        desk.select_date(date(2025, 1, 6));
        desk.select_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        desk.form.set_value("firstName", "Sarah");
        desk.form.set_value("lastName", "Moon");
        desk.form.set_value("email", "sarah@moon.music");
        desk.form.set_value("service", "recording");

        let sink = CapturingSink::new();
        let record = desk.submit(&sink).unwrap();
        assert_eq!(record.date, "2025-01-06");
        assert_eq!(record.time, "15:00");
        assert_eq!(record.first_name, "Sarah");
        assert_eq!(sink.delivered.borrow().len(), 1);

        // Everything reset
        assert_eq!(desk.selection.stage(), SelectionStage::NoSelection);
        assert!(desk.form.value_of("firstName").is_empty());
        assert_eq!(desk.label(), PLACEHOLDER_LABEL);
        assert_eq!(desk.notice.as_deref(), Some(CONFIRMATION_MESSAGE));
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = BookingRecord {
            date: "2025-01-06".into(),
            time: "15:00".into(),
            first_name: "Sarah".into(),
            last_name: "Moon".into(),
            email: "sarah@moon.music".into(),
            phone: "+15551234567".into(),
            artist_name: "Sarah Moon".into(),
            service: "recording".into(),
            description: String::new(),
            duration: "4".into(),
            requests: String::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"firstName\":\"Sarah\""));
        assert!(json.contains("\"artistName\":\"Sarah Moon\""));
    }

    #[test]
    fn reselecting_replaces_previous_date() {
        let mut desk = BookingDesk::starting_from(date(2025, 1, 1));
        desk.select_date(date(2025, 1, 6));
        desk.select_date(date(2025, 1, 7));
        assert_eq!(desk.selection.date, Some(date(2025, 1, 7)));
    }

    #[test]
    fn slot_cursor_wraps_both_directions() {
        let mut desk = BookingDesk::starting_from(date(2025, 1, 1));
        desk.move_slot(-1);
        assert_eq!(desk.cursor_slot, TIME_SLOTS.len() - 1);
        desk.move_slot(1);
        assert_eq!(desk.cursor_slot, 0);
    }

    #[test]
    fn cursor_slot_selection_parses_the_slot() {
        let mut desk = BookingDesk::starting_from(date(2025, 1, 1));
        desk.cursor_slot = 6; // 15:00
        desk.select_cursor_slot();
        assert_eq!(
            desk.selection.time,
            Some(NaiveTime::from_hms_opt(15, 0, 0).unwrap())
        );
    }
}
