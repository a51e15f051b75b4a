//! Paint a scene [`Plot`] as a ratatui `Chart`.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, Block, BorderType, Borders, Chart, Clear, Dataset, GraphType, LegendPosition, Paragraph,
};
use ratatui::Frame;

use crate::scene::{x_date, Annotation, Plot, SeriesKind, Stroke, XAxis};
use crate::theme::Theme;

/// One ratatui dataset's worth of owned points and styling.
struct Trace {
    name: Option<String>,
    points: Vec<(f64, f64)>,
    color: Color,
    marker: Marker,
    graph: GraphType,
}

fn traces(plot: &Plot, theme: &Theme) -> Vec<Trace> {
    let mut out = Vec::with_capacity(plot.series.len());
    for series in &plot.series {
        let points: Vec<(f64, f64)> = series.finite_points().collect();
        let color = match series.stroke {
            Stroke::Faded => theme.faded(series.color),
            Stroke::Solid | Stroke::Dashed => series.color,
        };
        let (graph, marker) = match (series.kind, series.stroke) {
            (SeriesKind::Stem, _) => (GraphType::Bar, Marker::Braille),
            (_, Stroke::Dashed) => (GraphType::Line, Marker::Dot),
            _ => (GraphType::Line, Marker::Braille),
        };
        let name = (plot.legend && series.kind == SeriesKind::Line).then(|| series.label.clone());

        if series.marker.is_some() {
            out.push(Trace {
                name: None,
                points: points.clone(),
                color,
                marker: Marker::Block,
                graph: GraphType::Scatter,
            });
        }
        out.push(Trace {
            name,
            points,
            color,
            marker,
            graph,
        });
    }
    out
}

fn datasets<'a>(traces: &'a [Trace]) -> Vec<Dataset<'a>> {
    traces
        .iter()
        .map(|t| {
            let mut dataset = Dataset::default()
                .marker(t.marker)
                .graph_type(t.graph)
                .style(Style::default().fg(t.color))
                .data(&t.points);
            if let Some(name) = &t.name {
                dataset = dataset.name(name.clone());
            }
            dataset
        })
        .collect()
}

fn x_labels(axis: XAxis, [lo, hi]: [f64; 2], style: Style) -> Vec<Span<'static>> {
    match axis {
        XAxis::Date => [lo, (lo + hi) / 2.0, hi]
            .iter()
            .map(|x| {
                let text = x_date(*x).map(|d| d.to_string()).unwrap_or_default();
                Span::styled(text, style)
            })
            .collect(),
        XAxis::Lag => vec![
            Span::styled(format!("{lo:.0}"), style),
            Span::styled(format!("{hi:.0}"), style),
        ],
    }
}

fn y_labels([lo, hi]: [f64; 2], style: Style) -> Vec<Span<'static>> {
    let fmt = |v: f64| {
        if (hi - lo).abs() < 10.0 {
            format!("{v:.2}")
        } else {
            format!("{v:.0}")
        }
    };
    vec![
        Span::styled(fmt(lo), style),
        Span::styled(fmt((lo + hi) / 2.0), style),
        Span::styled(fmt(hi), style),
    ]
}

/// Full plot: titled block, labelled axes, legend and annotation box.
pub fn render(f: &mut Frame, area: Rect, plot: &Plot, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(Span::styled(plot.title.as_str(), theme.title()));

    let Some((x_bounds, y_bounds)) = plot.bounds() else {
        let para = Paragraph::new(Span::styled("no data", theme.muted_style())).block(block);
        f.render_widget(para, area);
        return;
    };
    let inner = block.inner(area);

    let traces = traces(plot, theme);
    let muted = theme.muted_style();
    let chart = Chart::new(datasets(&traces))
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(plot.x_label.as_str(), muted))
                .style(muted)
                .bounds(x_bounds)
                .labels(x_labels(plot.x_axis, x_bounds, muted)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(plot.y_label.as_str(), muted))
                .style(muted)
                .bounds(y_bounds)
                .labels(y_labels(y_bounds, muted)),
        )
        .legend_position(plot.legend.then_some(LegendPosition::TopRight));
    f.render_widget(chart, area);

    if let Some(annotation) = &plot.annotation {
        render_annotation(f, inner, annotation, theme);
    }
}

/// Axis-free plot for thumbnails.
pub fn render_compact(f: &mut Frame, area: Rect, plot: &Plot, theme: &Theme) {
    let Some((x_bounds, y_bounds)) = plot.bounds() else {
        return;
    };
    let traces = traces(plot, theme);
    let chart = Chart::new(datasets(&traces))
        .x_axis(Axis::default().bounds(x_bounds))
        .y_axis(Axis::default().bounds(y_bounds))
        .legend_position(None);
    f.render_widget(chart, area);
}

/// Box anchored at the annotation's relative position inside `area`.
pub fn annotation_rect(area: Rect, annotation: &Annotation) -> Rect {
    let lines: Vec<&str> = annotation.text.lines().collect();
    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (text_width as u16).saturating_add(2).min(area.width);
    let height = (lines.len() as u16).saturating_add(2).min(area.height);

    let offset_x = (annotation.x.clamp(0.0, 1.0) * f64::from(area.width)).round() as u16;
    let offset_y = (annotation.y.clamp(0.0, 1.0) * f64::from(area.height)).round() as u16;
    let x = area.x + offset_x.min(area.width - width);
    let y = area.y + offset_y.min(area.height - height);
    Rect::new(x, y, width, height)
}

fn render_annotation(f: &mut Frame, area: Rect, annotation: &Annotation, theme: &Theme) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let rect = annotation_rect(area, annotation);
    let para = Paragraph::new(annotation.text.as_str())
        .style(theme.text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.warning_style()),
        );
    f.render_widget(Clear, rect);
    f.render_widget(para, rect);
}
