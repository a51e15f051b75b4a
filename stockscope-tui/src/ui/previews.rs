//! Thumbnail cells in the right-hand grid.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::preview::{Preview, PreviewBody};
use crate::theme::Theme;
use crate::ui::plot;

pub fn render(
    f: &mut Frame,
    area: Rect,
    preview: &Preview,
    number: usize,
    active: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(active))
        .title(format!(" {number} {} ", preview.view.label()))
        .title_style(if active { theme.title() } else { theme.muted_style() });
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &preview.body {
        PreviewBody::Plot(p) => plot::render_compact(f, inner, p, theme),
        PreviewBody::Caption(caption) => {
            let pad = inner.height.saturating_sub(1) / 2;
            let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
            lines.push(Line::from(Span::styled(*caption, theme.text())));
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }
    }
}
