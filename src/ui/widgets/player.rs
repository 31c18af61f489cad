use crate::app::App;
use crate::audio::DemoTrack;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Player card: current reel, transport state, track buttons, band meters.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Demo Player ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.surface));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let track = app.playback.current_track;
    let transport = if app.playback.is_playing {
        Span::styled("▶ Playing", Style::default().fg(theme.green))
    } else {
        Span::styled("⏸ Paused", Style::default().fg(theme.overlay))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                track.title(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(track.duration_label(), Style::default().fg(theme.overlay)),
            Span::raw("  "),
            transport,
        ]),
        Line::default(),
    ];

    // Track buttons
    let mut buttons = Vec::new();
    for (i, t) in DemoTrack::ALL.iter().enumerate() {
        let style = if *t == track {
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay)
        };
        buttons.push(Span::styled(format!(" [{}] {} ", i + 1, t.title()), style));
    }
    lines.push(Line::from(buttons));
    lines.push(Line::default());

    // Band meters through the analyzer adapter
    let levels = app.band_levels();
    for (label, level) in [
        ("bass  ", levels.bass),
        ("mids  ", levels.mid),
        ("treble", levels.treble),
    ] {
        lines.push(meter_line(label, level, theme));
    }

    lines.push(Line::from(Span::styled(
        " space play/pause · ←/→ switch reel",
        Style::default().fg(theme.overlay),
    )));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn meter_line<'a>(label: &'a str, level: f32, theme: &crate::ui::Theme) -> Line<'a> {
    const WIDTH: usize = 24;
    let filled = ((level.clamp(0.0, 1.0)) * WIDTH as f32).round() as usize;
    let bar: String = "▰".repeat(filled) + &"▱".repeat(WIDTH - filled);
    Line::from(vec![
        Span::styled(format!(" {label} "), Style::default().fg(theme.overlay)),
        Span::styled(bar, Style::default().fg(theme.cyan)),
    ])
}
