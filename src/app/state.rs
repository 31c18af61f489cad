use super::config::UserConfig;
use crate::audio::{AudioBackend, DemoTrack, FrequencyAnalyzer};
use crate::booking::{BookingDesk, BookingSink, LogSink};
use crate::catalog::Catalog;
use crate::showcase::{CardGrid, DetailView, FILTER_ALL};
use crate::ui::theme::Theme;
use crate::visualizer::{band_levels, BandLevels, ParticleField};
use std::time::{Duration, Instant};
use tracing::warn;

/// Which screen is showing 🎛️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Equipment,
    Portfolio,
    Booking,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Equipment, View::Portfolio, View::Booking];

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Studio",
            View::Equipment => "Equipment",
            View::Portfolio => "Portfolio",
            View::Booking => "Booking",
        }
    }

    pub fn next(&self) -> View {
        let pos = View::ALL.iter().position(|v| v == self).unwrap_or(0);
        View::ALL[(pos + 1) % View::ALL.len()]
    }

    pub fn prev(&self) -> View {
        let pos = View::ALL.iter().position(|v| v == self).unwrap_or(0);
        View::ALL[(pos + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Demo player state. Mutated only through play/pause/switch below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_track: DemoTrack,
    pub is_playing: bool,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub is_running: bool,
    pub view: View,

    pub catalog: Catalog,
    pub playback: PlaybackState,
    pub analyzer: FrequencyAnalyzer,
    pub field: ParticleField,

    pub equipment_grid: CardGrid,
    pub portfolio_grid: CardGrid,

    /// Shared detail popup; one entity shown at a time by construction.
    pub detail: Option<DetailView>,

    pub booking: BookingDesk,
    pub booking_sink: Box<dyn BookingSink>,

    pub toast: Option<Toast>,
    pub show_keyhints: bool,
}

/// Distinct categories in first-seen order, with the "all" sentinel first.
fn filter_keys(categories: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut keys = vec![FILTER_ALL];
    for cat in categories {
        if !keys.contains(&cat) {
            keys.push(cat);
        }
    }
    keys
}

impl App {
    pub fn new(config: &UserConfig) -> Self {
        let catalog = Catalog::load();

        let equipment_filters = filter_keys(catalog.equipment().iter().map(|e| e.category));
        let equipment_cards: Vec<(&str, &str)> = catalog
            .equipment()
            .iter()
            .map(|e| (e.id, e.category))
            .collect();

        let portfolio_filters = filter_keys(catalog.projects().iter().map(|p| p.category));
        let portfolio_cards: Vec<(&str, &str)> = catalog
            .projects()
            .iter()
            .map(|p| (p.id, p.category))
            .collect();

        let _ = config; // reserved for future per-user tweaks beyond audio_dir

        Self {
            theme: crate::ui::theme::load_current_theme(),
            is_running: true,
            view: View::default(),
            catalog,
            playback: PlaybackState::default(),
            analyzer: FrequencyAnalyzer::new(),
            field: ParticleField::new(400.0, 200.0),
            equipment_grid: CardGrid::new(&equipment_filters, &equipment_cards),
            portfolio_grid: CardGrid::new(&portfolio_filters, &portfolio_cards),
            detail: None,
            booking: BookingDesk::new(),
            booking_sink: Box::new(LogSink),
            toast: None,
            show_keyhints: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════

    /// Start the current demo. A rejected play (missing file, dead device)
    /// is caught and logged; the playing flag stays unset.
    pub fn play(&mut self, backend: &mut dyn AudioBackend) {
        match backend.play() {
            Ok(()) => self.playback.is_playing = true,
            Err(e) => {
                warn!("demo playback failed: {e}");
                self.show_toast("🔇 Demo audio unavailable");
            }
        }
    }

    pub fn pause(&mut self, backend: &mut dyn AudioBackend) {
        backend.pause();
        self.playback.is_playing = false;
    }

    pub fn toggle_playback(&mut self, backend: &mut dyn AudioBackend) {
        if self.playback.is_playing {
            self.pause(backend);
        } else {
            self.play(backend);
        }
    }

    /// Switch reels. If a demo was playing, playback restarts on the new
    /// file; a failed restart drops back to paused.
    pub fn switch_track(&mut self, backend: &mut dyn AudioBackend, track: DemoTrack) {
        self.playback.current_track = track;
        backend.load(track);
        if self.playback.is_playing {
            self.playback.is_playing = false;
            self.play(backend);
        }
    }

    /// Terminal lost focus (the page-hidden analogue): pause audio, keep
    /// the idle particle motion running.
    pub fn on_focus_lost(&mut self, backend: &mut dyn AudioBackend) {
        if self.playback.is_playing {
            self.pause(backend);
        }
    }

    pub fn band_levels(&self) -> BandLevels {
        band_levels(&self.analyzer)
    }

    // ═══════════════════════════════════════════════════════════════
    // Detail popup
    // ═══════════════════════════════════════════════════════════════

    /// No-op on unknown ids; reopening while open replaces the content.
    pub fn open_equipment_detail(&mut self, id: &str) {
        if self.catalog.find_equipment(id).is_some() {
            self.detail = Some(DetailView::Equipment(id.to_string()));
        }
    }

    pub fn open_project_detail(&mut self, id: &str) {
        if self.catalog.find_project(id).is_some() {
            self.detail = Some(DetailView::Project(id.to_string()));
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    // ═══════════════════════════════════════════════════════════════
    // Booking
    // ═══════════════════════════════════════════════════════════════

    /// Submit through the configured sink; surfaces the confirmation or the
    /// incomplete-selection prompt as a toast.
    pub fn submit_booking(&mut self) {
        match self.booking.submit(self.booking_sink.as_ref()) {
            Ok(_) => self.show_toast("✅ Booking request sent"),
            Err(e) => self.show_toast(&e.to_string()),
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Tick
    // ═══════════════════════════════════════════════════════════════

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let deadline = now + Duration::from_millis(2500);

        if let Some(ref mut current) = self.toast {
            // Update in place so rapid toasts don't replay the entrance
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    /// Called every animation tick.
    pub fn on_tick(&mut self, dt: Duration) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }

        // Snapshot refresh only while playing; otherwise it stays frozen
        if self.playback.is_playing {
            self.analyzer.refresh();
        }

        let dt_secs = dt.as_secs_f32();
        self.field.step(dt_secs);

        let dt_ms = dt_secs * 1000.0;
        self.equipment_grid.tick(dt_ms);
        self.portfolio_grid.tick(dt_ms);
    }
}
