use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const SLIDE_MS: u128 = 250;

/// Top-right notification. Slides in from the right edge, holds, then
/// slides back out as the deadline approaches. Expiry itself happens in
/// `App::on_tick`.
pub fn render(f: &mut Frame, app: &App) {
    let toast = match &app.toast {
        Some(t) => t,
        None => return,
    };
    let theme = &app.theme;
    let now = std::time::Instant::now();

    let width = (toast.message.chars().count() as u16 + 6).min(f.area().width.saturating_sub(4));
    let target_x = f.area().width.saturating_sub(width + 1);
    let mut x = target_x;

    let since_shown = now.duration_since(toast.start_time).as_millis();
    let remaining = toast.deadline.saturating_duration_since(now).as_millis();

    if since_shown < SLIDE_MS {
        let t = since_shown as f32 / SLIDE_MS as f32;
        let ease = 1.0 - (1.0 - t).powi(3);
        x += (width as f32 * (1.0 - ease)) as u16;
    } else if remaining < SLIDE_MS {
        let t = (SLIDE_MS - remaining) as f32 / SLIDE_MS as f32;
        x += (width as f32 * t.powi(3)) as u16;
    }

    if x >= f.area().width {
        return;
    }

    let area = Rect::new(x, 1, width, 3).intersection(f.area());
    if area.is_empty() {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let text = Paragraph::new(Line::from(Span::styled(
        toast.message.as_str(),
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(text, area);
}
