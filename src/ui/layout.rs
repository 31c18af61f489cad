use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub tab_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // View tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        tab_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

pub struct HomeLayout {
    pub player: Rect,
    pub visualizer: Rect,
}

/// Home view: player card above, visualizer canvas dominant below. On very
/// short terminals the visualizer takes everything.
pub fn get_home_layout(area: Rect) -> HomeLayout {
    if area.height < 14 {
        return HomeLayout {
            player: Rect::new(area.x, area.y, area.width, 0),
            visualizer: area,
        };
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(area);
    HomeLayout {
        player: chunks[0],
        visualizer: chunks[1],
    }
}

pub struct BookingLayout {
    pub calendar: Rect,
    pub slots: Rect,
    pub form: Rect,
}

/// Booking view: calendar and slot grid on the left, form on the right.
pub fn get_booking_layout(area: Rect) -> BookingLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(columns[0]);

    BookingLayout {
        calendar: left[0],
        slots: left[1],
        form: columns[1],
    }
}
