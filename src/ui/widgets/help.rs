use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("tab / shift-tab", "cycle views"),
    ("H E P B", "jump to view"),
    ("space", "play / pause demo"),
    ("1 2 3", "pick demo reel"),
    ("←/→", "switch reel / filter"),
    ("j/k or ↑/↓", "move cursor"),
    ("enter", "open details / select"),
    ("p", "preview project (portfolio)"),
    ("s", "submit booking"),
    ("esc", "close popup"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render(f: &mut Frame, app: &App) {
    if !app.show_keyhints {
        return;
    }
    let theme = &app.theme;

    let width = 44u16.min(f.area().width.saturating_sub(2));
    let height = (BINDINGS.len() as u16 + 2).min(f.area().height.saturating_sub(2));
    let area = Rect::new(
        (f.area().width.saturating_sub(width)) / 2,
        (f.area().height.saturating_sub(height)) / 2,
        width,
        height,
    );
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " Keys ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.blue));

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<16}"),
                    Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
