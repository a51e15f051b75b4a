//! Keyboard and mouse dispatch.
//!
//! Number keys select the n-th registered view, exactly like clicking its
//! thumbnail. Mouse cells are converted to normalised figure coordinates
//! before they reach the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::view::Location;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if app.dashboard.select_nth(index).is_some() {
                app.refresh_status();
            }
        }
        _ => {}
    }
}

/// Handle a mouse event over `figure`, the area the regions are laid out in.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, figure: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(at) = cell_location(mouse.column, mouse.row, figure) else {
        return;
    };
    if app.dashboard.on_click(at).is_some() {
        app.refresh_status();
    }
}

/// Centre of a terminal cell in normalised coordinates of `figure`.
pub fn cell_location(column: u16, row: u16, figure: Rect) -> Option<Location> {
    if figure.width == 0
        || figure.height == 0
        || column < figure.x
        || row < figure.y
        || column >= figure.x + figure.width
        || row >= figure.y + figure.height
    {
        return None;
    }
    Some(Location::new(
        (f64::from(column - figure.x) + 0.5) / f64::from(figure.width),
        (f64::from(row - figure.y) + 0.5) / f64::from(figure.height),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_centres_map_into_unit_square() {
        let figure = Rect::new(0, 0, 100, 40);
        let at = cell_location(0, 0, figure).unwrap();
        assert!((at.x - 0.005).abs() < 1e-12 && (at.y - 0.0125).abs() < 1e-12);
        let at = cell_location(99, 39, figure).unwrap();
        assert!(at.x < 1.0 && at.y < 1.0);
    }

    #[test]
    fn cells_outside_the_figure_have_no_location() {
        let figure = Rect::new(2, 1, 10, 10);
        assert!(cell_location(1, 5, figure).is_none());
        assert!(cell_location(5, 11, figure).is_none());
        assert!(cell_location(12, 5, figure).is_none());
        assert!(cell_location(5, 5, Rect::new(0, 0, 0, 0)).is_none());
    }
}
