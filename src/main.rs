use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use resonance_desk::app::cli::Args;
use resonance_desk::app::config::AppConfig;
use resonance_desk::app::events::AppEvent;
use resonance_desk::app::{inputs, App};
use resonance_desk::audio::{AudioBackend, DemoPlayer, NullBackend};
use resonance_desk::ui;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();

    let args = Args::parse();

    if args.generate_config {
        let default = resonance_desk::app::config::UserConfig::default();
        print!("{}", toml::to_string_pretty(&default)?);
        return Ok(());
    }

    let config = AppConfig::load();

    // File logging; stdout belongs to the terminal UI
    let file_appender = tracing_appender::rolling::daily(AppConfig::log_dir(), "resonance-desk.log");
    let (writer, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut app = App::new(&config);

    // Backend selection: a dead audio device degrades to visuals-only
    let mut backend: Box<dyn AudioBackend> = if args.muted {
        Box::new(NullBackend)
    } else {
        let audio_dir = args
            .audio_dir
            .unwrap_or_else(|| config.audio_directory.clone().into());
        match DemoPlayer::new(audio_dir, app.analyzer.buffer_handle()) {
            Ok(player) => Box::new(player),
            Err(e) => {
                warn!("audio device unavailable, running muted: {e}");
                app.show_toast("🔇 No audio device (visuals only)");
                Box::new(NullBackend)
            }
        }
    };
    backend.load(app.playback.current_track);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input event task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Animation tick task
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    let mut last_tick = Instant::now();

    while app.is_running {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Some(event) = rx.recv().await {
            match event {
                AppEvent::Input(Event::Key(key)) => {
                    inputs::handle_event(key, &mut app, backend.as_mut());
                }
                AppEvent::Input(Event::FocusLost) => {
                    app.on_focus_lost(backend.as_mut());
                }
                AppEvent::Input(_) => {}
                AppEvent::Tick => {
                    let now = Instant::now();
                    app.on_tick(now - last_tick);
                    last_tick = now;
                }
            }
        }
    }

    // Teardown
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
