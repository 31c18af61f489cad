pub mod layout;
pub mod theme;
pub mod widgets;

pub use theme::Theme;

use crate::app::{App, View};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let main_layout = layout::get_main_layout(area);

    render_tabs(f, main_layout.tab_area, app);

    match app.view {
        View::Home => {
            let home = layout::get_home_layout(main_layout.body_area);
            if home.player.height > 0 {
                widgets::player::render(f, home.player, app);
            }
            widgets::visualizer::render(f, home.visualizer, app);
        }
        View::Equipment => widgets::showcase::render_equipment(f, main_layout.body_area, app),
        View::Portfolio => widgets::showcase::render_portfolio(f, main_layout.body_area, app),
        View::Booking => widgets::booking::render(f, main_layout.body_area, app),
    }

    // Footer hint (hidden while the key help is up)
    if !app.show_keyhints {
        let theme = &app.theme;
        let hint = Line::from(vec![
            Span::styled(
                " ? ",
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        let footer = Paragraph::new(hint).alignment(Alignment::Right);
        f.render_widget(footer, main_layout.footer_area);
    }

    // Overlays
    widgets::modal::render(f, app);
    widgets::help::render(f, app);
    widgets::toast::render(f, app);
}

fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        " ◉ Resonance Studios  ",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )];
    for view in View::ALL {
        let style = if view == app.view {
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay)
        };
        spans.push(Span::styled(format!(" {} ", view.title()), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
