use crate::app::App;
use crate::visualizer::{band_for, BarBand, BAR_COUNT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Logical units per terminal cell. A cell is roughly half as wide as it is
/// tall, so the particle field keeps the original canvas proportions.
const CELL_W: f32 = 4.0;
const CELL_H: f32 = 8.0;

fn dim(color: Color, alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * a) as u8,
            (g as f32 * a) as u8,
            (b as f32 * a) as u8,
        ),
        other => other,
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(" Live Room ", Style::default().fg(theme.blue)))
        .border_style(Style::default().fg(theme.surface));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let height = inner.height as usize;

    if width < 10 || height < 4 {
        let msg = Paragraph::new("♪ Resize for visualizer")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.overlay));
        f.render_widget(msg, inner);
        return;
    }

    // Keep the drawing surface matched to its container
    app.field
        .resize(width as f32 * CELL_W, height as f32 * CELL_H);

    let mut cells: Vec<Vec<Option<(char, Color)>>> = vec![vec![None; width]; height];

    // 1. Connection lines, underneath everything
    let particles = app.field.particles().to_vec();
    for (i, j, alpha) in app.field.links() {
        let (x0, y0) = to_cell(particles[i].x, particles[i].y, width, height);
        let (x1, y1) = to_cell(particles[j].x, particles[j].y, width, height);
        let color = dim(theme.blue, alpha * 0.5);
        plot_line(&mut cells, x0, y0, x1, y1, '·', color);
    }

    // 2. Particles
    for p in &particles {
        let (cx, cy) = to_cell(p.x, p.y, width, height);
        let glyph = if p.size > 4.5 {
            '●'
        } else if p.size > 3.0 {
            '•'
        } else {
            '∙'
        };
        cells[cy][cx] = Some((glyph, dim(theme.blue, p.alpha)));
    }

    // 3. Amplitude bars while a demo is playing, bottom-anchored
    if app.playback.is_playing {
        let bars = app.field.bar_heights(&app.analyzer);
        for col in 0..width {
            let bucket = col * BAR_COUNT / width;
            let bar_cells = (bars[bucket] / CELL_H).round() as usize;
            let color = match band_for(bucket) {
                BarBand::Bass => theme.amber,
                BarBand::Mid => theme.blue,
                BarBand::Treble => theme.cyan,
            };
            let color = dim(color, 0.6);
            for row in 0..bar_cells.min(height) {
                cells[height - 1 - row][col] = Some(('█', color));
            }
        }
    }

    let lines: Vec<Line> = cells
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| match cell {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::default().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn to_cell(x: f32, y: f32, width: usize, height: usize) -> (usize, usize) {
    let cx = ((x / CELL_W) as usize).min(width.saturating_sub(1));
    let cy = ((y / CELL_H) as usize).min(height.saturating_sub(1));
    (cx, cy)
}

/// Bresenham between two cells; only fills empty cells so particles and
/// bars stay on top.
fn plot_line(
    cells: &mut [Vec<Option<(char, Color)>>],
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    glyph: char,
    color: Color,
) {
    let (mut x0, mut y0) = (x0 as i32, y0 as i32);
    let (x1, y1) = (x1 as i32, y1 as i32);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if let Some(row) = cells.get_mut(y0 as usize) {
            if let Some(cell) = row.get_mut(x0 as usize) {
                if cell.is_none() {
                    *cell = Some((glyph, color));
                }
            }
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
