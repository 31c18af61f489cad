use crate::app::App;
use crate::audio::{AudioBackend, DemoTrack};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_player_events(key: KeyEvent, app: &mut App, backend: &mut dyn AudioBackend) -> bool {
    match key.code {
        KeyCode::Char(' ') => {
            app.toggle_playback(backend);
            true
        }
        KeyCode::Char('1') => {
            app.switch_track(backend, DemoTrack::Electronic);
            true
        }
        KeyCode::Char('2') => {
            app.switch_track(backend, DemoTrack::Acoustic);
            true
        }
        KeyCode::Char('3') => {
            app.switch_track(backend, DemoTrack::Rock);
            true
        }
        // Cycle reels without reaching for the number row
        KeyCode::Left | KeyCode::Char('h') => {
            let all = DemoTrack::ALL;
            let pos = all
                .iter()
                .position(|t| *t == app.playback.current_track)
                .unwrap_or(0);
            app.switch_track(backend, all[(pos + all.len() - 1) % all.len()]);
            true
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let all = DemoTrack::ALL;
            let pos = all
                .iter()
                .position(|t| *t == app.playback.current_track)
                .unwrap_or(0);
            app.switch_track(backend, all[(pos + 1) % all.len()]);
            true
        }
        _ => false,
    }
}
