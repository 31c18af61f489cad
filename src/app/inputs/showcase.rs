use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grid {
    Equipment,
    Portfolio,
}

pub fn handle_showcase_events(key: KeyEvent, app: &mut App, which: Grid) -> bool {
    let grid = match which {
        Grid::Equipment => &mut app.equipment_grid,
        Grid::Portfolio => &mut app.portfolio_grid,
    };

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            grid.select_next();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            grid.select_prev();
            true
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('f') => {
            grid.next_filter();
            true
        }
        KeyCode::Left | KeyCode::Char('h') => {
            grid.prev_filter();
            true
        }
        KeyCode::Enter => {
            let id = grid.selected_card().map(|c| c.id.clone());
            if let Some(id) = id {
                match which {
                    Grid::Equipment => app.open_equipment_detail(&id),
                    Grid::Portfolio => app.open_project_detail(&id),
                }
            }
            true
        }
        // Portfolio-only: preview a project's sound
        KeyCode::Char('p') if which == Grid::Portfolio => {
            if let Some(card) = grid.selected_card() {
                let id = card.id.clone();
                info!("playing project preview: {id}");
                let title = app
                    .catalog
                    .find_project(&id)
                    .map(|p| p.title)
                    .unwrap_or("project");
                app.show_toast(&format!("▶ Previewing {title}"));
            }
            true
        }
        _ => false,
    }
}
