use crate::app::App;
use crate::booking::{BookingFocus, FieldKind, TIME_SLOTS};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let layout = crate::ui::layout::get_booking_layout(area);
    render_calendar(f, layout.calendar, app);
    render_slots(f, layout.slots, app);
    render_form(f, layout.form, app);
}

fn pane_block<'a>(title: &'a str, focused: bool, theme: &crate::ui::Theme) -> Block<'a> {
    let border = if focused { theme.blue } else { theme.surface };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(title, Style::default().fg(theme.blue)))
        .border_style(Style::default().fg(border))
}

fn render_calendar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let desk = &app.booking;

    let block = pane_block(
        " Pick a Date ",
        desk.focus == BookingFocus::Calendar,
        theme,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let month_start = desk.visible_month();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", month_start.format("%B %Y")),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Su Mo Tu We Th Fr Sa",
            Style::default().fg(theme.overlay),
        )),
    ];

    // Sunday-first column for the 1st of the month
    let lead = month_start.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(month_start);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    spans.extend(std::iter::repeat(Span::raw("   ")).take(lead));

    for day in 1..=days {
        let date = month_start.with_day(day).unwrap_or(month_start);
        let style = if date == desk.cursor_day {
            Style::default()
                .fg(theme.base)
                .bg(theme.blue)
                .add_modifier(Modifier::BOLD)
        } else if desk.selection.date == Some(date) {
            Style::default().fg(theme.green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(format!("{day:>2}"), style));
        spans.push(Span::raw(" "));

        if date.weekday() == Weekday::Sat {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw(" "));
        }
    }
    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " h/l day · j/k week · enter select",
        Style::default().fg(theme.overlay),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_slots(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let desk = &app.booking;

    let block = pane_block(
        " Pick a Time ",
        desk.focus == BookingFocus::TimeSlots,
        theme,
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for row in TIME_SLOTS.chunks(5) {
        let mut spans = vec![Span::raw(" ")];
        for slot in row {
            let idx = TIME_SLOTS.iter().position(|s| s == slot).unwrap_or(0);
            let time = NaiveTime::parse_from_str(slot, "%H:%M").ok();
            let selected = time.is_some() && desk.selection.time == time;
            let style = if idx == desk.cursor_slot && desk.focus == BookingFocus::TimeSlots {
                Style::default()
                    .fg(theme.base)
                    .bg(theme.blue)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let label = time
                .map(|t| t.format("%-I:%M %p").to_string())
                .unwrap_or_else(|| slot.to_string());
            spans.push(Span::styled(format!("{label:>9}"), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        " j/k move · enter select · s submit",
        Style::default().fg(theme.overlay),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let desk = &app.booking;
    let form_focused = desk.focus == BookingFocus::Form;

    let block = pane_block(" Session Details ", form_focused, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Selected: ", Style::default().fg(theme.overlay)),
            Span::styled(
                desk.label(),
                Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];

    for (i, field) in desk.form.fields().iter().enumerate() {
        let active = form_focused && i == desk.form.active_index();
        let marker = if active { "▶ " } else { "  " };

        let label_style = if field.invalid {
            Style::default().fg(theme.red).add_modifier(Modifier::BOLD)
        } else if active {
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay)
        };

        let shown = match field.kind {
            FieldKind::Select if field.value.is_empty() => "‹ choose ›".to_string(),
            FieldKind::Select => format!("‹ {} ›", field.value),
            _ => field.value.clone(),
        };
        let required = if field.required { "*" } else { " " };

        lines.push(Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(format!("{}{required:<1} ", field.label), label_style),
            Span::styled(shown, Style::default().fg(theme.text)),
            Span::raw(if active { "▏" } else { "" }),
        ]));
    }

    if let Some(notice) = &desk.notice {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {notice}"),
            Style::default().fg(theme.green),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " tab next · ←/→ service · enter submit",
        Style::default().fg(theme.overlay),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Day count of the month `first` belongs to. `first` is the 1st.
fn days_in_month(first: NaiveDate) -> u32 {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next {
        Some(n) => (n - Duration::days(1)).day(),
        None => 31,
    }
}
