//! Bottom status bar — view hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.dashboard.theme();
    let mut spans: Vec<Span> = Vec::new();

    let hints: Vec<String> = app
        .dashboard
        .registry()
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}:{}", i + 1, entry.view.label()))
        .collect();
    spans.push(Span::styled(
        format!(" {} q:Quit", hints.join(" ")),
        theme.muted_style(),
    ));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme.title(),
            StatusLevel::Warning => theme.warning_style(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
