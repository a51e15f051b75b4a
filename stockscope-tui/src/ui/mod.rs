//! Top-level UI layout — figure (main area + thumbnails) over a status bar.

pub mod plot;
pub mod previews;
pub mod status_bar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::scene::Layer;
use crate::view::{NormRect, MAIN_REGION};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let (figure, status_area) = split(f.area());
    let theme = app.dashboard.theme();

    draw_main(f, to_cells(MAIN_REGION, figure), app);

    let current = app.dashboard.current();
    for (index, (entry, preview)) in app
        .dashboard
        .registry()
        .entries()
        .iter()
        .zip(app.dashboard.previews())
        .enumerate()
    {
        let area = to_cells(entry.region, figure);
        previews::render(f, area, preview, index + 1, entry.view == current, theme);
    }

    status_bar::render(f, status_area, app);
}

/// The figure area click regions are laid out in: everything above the status bar.
pub fn figure_area(area: Rect) -> Rect {
    split(area).0
}

fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Map a normalised region onto terminal cells of `figure`.
pub fn to_cells(region: NormRect, figure: Rect) -> Rect {
    let w = f64::from(figure.width);
    let h = f64::from(figure.height);
    let x0 = (region.x * w).round().clamp(0.0, w) as u16;
    let y0 = (region.y * h).round().clamp(0.0, h) as u16;
    let x1 = ((region.x + region.width) * w).round().clamp(0.0, w) as u16;
    let y1 = ((region.y + region.height) * h).round().clamp(0.0, h) as u16;
    Rect::new(
        figure.x + x0,
        figure.y + y0,
        x1.saturating_sub(x0),
        y1.saturating_sub(y0),
    )
}

/// Draw the active view's scene with its border, plus the console strip.
fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    let dashboard = &app.dashboard;
    let theme = dashboard.theme();
    let scene = dashboard.scene();
    let view = dashboard.current();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .title(format!(" {} | {} ", dashboard.store().symbol(), view.label()))
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let console = scene.console();
    let (plots_area, console_area) = if console.is_empty() {
        (inner, None)
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(console.len() as u16 + 2),
            ])
            .split(inner);
        (chunks[0], Some(chunks[1]))
    };

    let (rows, cols) = scene.grid();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(plots_area);

    for element in scene.elements() {
        match &element.layer {
            Layer::Plot(plot) => {
                let row = row_areas[plot.cell.row.min(rows - 1)];
                let cells = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
                    .split(row);
                plot::render(f, cells[plot.cell.col.min(cols - 1)], plot, theme);
            }
            Layer::Message(text) => {
                let para = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(text.as_str(), theme.warning_style())),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                f.render_widget(para, plots_area);
            }
        }
    }

    if let Some(console_area) = console_area {
        let lines: Vec<Line> = console
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), theme.text())))
            .collect();
        let para = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.muted_style())
                .title(" Console "),
        );
        f.render_widget(para, console_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_leaves_one_line_for_status() {
        let figure = figure_area(Rect::new(0, 0, 120, 40));
        assert_eq!(figure, Rect::new(0, 0, 120, 39));
    }

    #[test]
    fn regions_scale_with_the_figure() {
        let figure = Rect::new(0, 0, 200, 40);
        let main = to_cells(MAIN_REGION, figure);
        assert_eq!(main, Rect::new(10, 2, 120, 34));
        let thumb = to_cells(NormRect::new(0.7, 0.1, 0.125, 0.4), figure);
        assert_eq!(thumb, Rect::new(140, 4, 25, 16));
    }
}
