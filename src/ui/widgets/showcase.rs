use crate::app::App;
use crate::showcase::CardGrid;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

fn fade(color: Color, opacity: f32) -> Color {
    let a = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * a) as u8,
            (g as f32 * a) as u8,
            (b as f32 * a) as u8,
        ),
        other => other,
    }
}

pub fn render_equipment(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let grid = &app.equipment_grid;
    let rows: Vec<(String, Line)> = grid
        .cards()
        .iter()
        .filter(|c| c.in_layout())
        .map(|card| {
            let opacity = card.opacity();
            let selected =
                grid.selected_card().map(|s| s.id == card.id).unwrap_or(false);
            let item = app.catalog.find_equipment(&card.id);
            let (name, kind, price) = item
                .map(|e| (e.name, e.kind, e.price))
                .unwrap_or(("?", "?", "?"));
            let marker = if selected { "▶ " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(fade(theme.blue, opacity))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fade(theme.text, opacity))
            };
            (
                card.id.clone(),
                Line::from(vec![
                    Span::raw(marker.to_string()),
                    Span::styled(format!("{name:<22}"), name_style),
                    Span::styled(
                        format!("{kind:<26}"),
                        Style::default().fg(fade(theme.overlay, opacity)),
                    ),
                    Span::styled(price.to_string(), Style::default().fg(fade(theme.green, opacity))),
                ]),
            )
        })
        .collect();

    render_grid(f, area, app, grid, " Equipment ", rows);
}

pub fn render_portfolio(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let grid = &app.portfolio_grid;
    let rows: Vec<(String, Line)> = grid
        .cards()
        .iter()
        .filter(|c| c.in_layout())
        .map(|card| {
            let opacity = card.opacity();
            let selected =
                grid.selected_card().map(|s| s.id == card.id).unwrap_or(false);
            let item = app.catalog.find_project(&card.id);
            let (title, artist, year, genre) = item
                .map(|p| (p.title, p.artist, p.year, p.genre))
                .unwrap_or(("?", "?", "?", "?"));
            let marker = if selected { "▶ " } else { "  " };
            let title_style = if selected {
                Style::default()
                    .fg(fade(theme.blue, opacity))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fade(theme.text, opacity))
            };
            (
                card.id.clone(),
                Line::from(vec![
                    Span::raw(marker.to_string()),
                    Span::styled(format!("{title:<22}"), title_style),
                    Span::styled(
                        format!("{artist:<18}"),
                        Style::default().fg(fade(theme.blue, opacity)),
                    ),
                    Span::styled(
                        format!("{year}  "),
                        Style::default().fg(fade(theme.overlay, opacity)),
                    ),
                    Span::styled(genre.to_string(), Style::default().fg(fade(theme.cyan, opacity))),
                ]),
            )
        })
        .collect();

    render_grid(f, area, app, grid, " Portfolio ", rows);
}

fn render_grid(
    f: &mut Frame,
    area: Rect,
    app: &App,
    grid: &CardGrid,
    title: &str,
    rows: Vec<(String, Line)>,
) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    // Filter buttons, exactly one active
    let mut spans = vec![Span::raw(" ")];
    for (i, key) in grid.filters().iter().enumerate() {
        let style = if i == grid.active_filter_index() {
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay)
        };
        spans.push(Span::styled(format!("[{key}] "), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(title, Style::default().fg(theme.blue)))
        .border_style(Style::default().fg(theme.surface));
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len() * 2);
    for (_, line) in rows {
        lines.push(line);
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nothing in this category",
            Style::default().fg(theme.overlay),
        )));
    }
    lines.push(Line::from(Span::styled(
        "  ↑/↓ browse · ←/→ filter · enter details",
        Style::default().fg(theme.overlay),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
