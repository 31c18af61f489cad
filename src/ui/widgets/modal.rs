use crate::app::App;
use crate::showcase::DetailView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let w = area.width * percent_x / 100;
    let h = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Shared detail popup for equipment and projects.
pub fn render(f: &mut Frame, app: &App) {
    let detail = match &app.detail {
        Some(d) => d,
        None => return,
    };
    let theme = &app.theme;

    let (title, lines) = match detail {
        DetailView::Equipment(id) => match app.catalog.find_equipment(id) {
            Some(gear) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            gear.price,
                            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(gear.kind, Style::default().fg(theme.overlay)),
                    ]),
                    Line::default(),
                    Line::from(Span::styled(
                        gear.description,
                        Style::default().fg(theme.text),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Key Features",
                        Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
                    )),
                ];
                for feature in &gear.features {
                    lines.push(Line::from(Span::styled(
                        format!("  • {feature}"),
                        Style::default().fg(theme.text),
                    )));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Technical Specifications",
                    Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
                )));
                for (label, value) in &gear.specs {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {label:<20}"), Style::default().fg(theme.overlay)),
                        Span::styled(*value, Style::default().fg(theme.text)),
                    ]));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "[Enter] Book Equipment   [Esc] Close",
                    Style::default().fg(theme.green),
                )));
                (gear.name, lines)
            }
            None => return,
        },
        DetailView::Project(id) => match app.catalog.find_project(id) {
            Some(project) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            project.artist,
                            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(" • ", Style::default().fg(theme.overlay)),
                        Span::styled(project.year, Style::default().fg(theme.overlay)),
                        Span::styled(" • ", Style::default().fg(theme.overlay)),
                        Span::styled(project.genre, Style::default().fg(theme.cyan)),
                    ]),
                    Line::default(),
                    Line::from(Span::styled(
                        project.description,
                        Style::default().fg(theme.text),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Track List",
                        Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
                    )),
                ];
                for (i, track) in project.tracks.iter().enumerate() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}. {track}", i + 1),
                        Style::default().fg(theme.text),
                    )));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Production Credits",
                    Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
                )));
                for (role, name) in &project.credits {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {role:<12}"), Style::default().fg(theme.overlay)),
                        Span::styled(*name, Style::default().fg(theme.text)),
                    ]));
                }
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "[Enter] Listen Full Album   [Esc] Close",
                    Style::default().fg(theme.green),
                )));
                (project.title, lines)
            }
            None => return,
        },
    };

    let popup = centered_rect(f.area(), 72, 80);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.blue));

    let content = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(content, popup);
}
