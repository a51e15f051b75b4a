//! Retained display list for the main drawing area.
//!
//! Every render begins with [`Scene::clear`], which retires all elements of
//! the previous render and bumps the generation counter. Each element is
//! tagged with the generation that drew it, so "only the current render's
//! elements remain" is directly checkable.

use chrono::{Datelike, NaiveDate};
use ratatui::style::Color;

use crate::view::ViewState;

/// How a series' line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    /// Solid, blended toward the background.
    Faded,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    /// Vertical bar from zero to each point (correlograms).
    Stem,
    /// Confidence boundary drawn behind stems.
    Band,
}

/// Point markers drawn on top of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointMarker {
    Circle,
}

/// What the x coordinate of a plot means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    /// Days since the common era, see [`date_x`].
    Date,
    Lag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: Color,
    pub stroke: Stroke,
    pub marker: Option<PointMarker>,
    pub kind: SeriesKind,
}

impl Series {
    pub fn line(label: impl Into<String>, points: Vec<(f64, f64)>, color: Color) -> Self {
        Self {
            label: label.into(),
            points,
            color,
            stroke: Stroke::Solid,
            marker: None,
            kind: SeriesKind::Line,
        }
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn marker(mut self, marker: PointMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn kind(mut self, kind: SeriesKind) -> Self {
        self.kind = kind;
        self
    }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Text box anchored in plot coordinates (`0..1`, origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Position of a plot inside the main area's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub cell: GridCell,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_axis: XAxis,
    pub legend: bool,
    pub series: Vec<Series>,
    pub annotation: Option<Annotation>,
}

impl Plot {
    pub fn new(title: impl Into<String>, x_axis: XAxis) -> Self {
        Self {
            cell: GridCell::default(),
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_axis,
            legend: false,
            series: Vec::new(),
            annotation: None,
        }
    }

    pub fn at(mut self, row: usize, col: usize) -> Self {
        self.cell = GridCell { row, col };
        self
    }

    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Padded `[min, max]` over all finite points, or `None` if empty.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut points = self.series.iter().flat_map(|s| s.finite_points()).peekable();
        points.peek()?;
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        let pad = ((y_max - y_min).abs() * 0.05).max(1e-9);
        if x_max <= x_min {
            x_max = x_min + 1.0;
        }
        Some(([x_min, x_max], [y_min - pad, y_max + pad]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Plot(Plot),
    /// Shown in place of a view that failed to render.
    Message(String),
}

/// A layer plus the generation that drew it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub generation: u64,
    pub layer: Layer,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    generation: u64,
    view: Option<ViewState>,
    elements: Vec<Element>,
    console: Vec<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire every element and console line; returns how many elements went.
    pub fn clear(&mut self) -> usize {
        let retired = self.elements.len();
        self.elements.clear();
        self.console.clear();
        self.view = None;
        self.generation += 1;
        retired
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = Some(view);
    }

    pub fn push(&mut self, layer: Layer) {
        self.elements.push(Element {
            generation: self.generation,
            layer,
        });
    }

    pub fn push_plot(&mut self, plot: Plot) {
        self.push(Layer::Plot(plot));
    }

    /// Queue a plain-text console line for the current render.
    pub fn print(&mut self, line: impl Into<String>) {
        self.console.push(line.into());
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> Option<ViewState> {
        self.view
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn plots(&self) -> impl Iterator<Item = &Plot> {
        self.elements.iter().filter_map(|e| match &e.layer {
            Layer::Plot(plot) => Some(plot),
            Layer::Message(_) => None,
        })
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match &e.layer {
            Layer::Message(text) => Some(text.as_str()),
            Layer::Plot(_) => None,
        })
    }

    pub fn console(&self) -> &[String] {
        &self.console
    }

    /// Rows and columns spanned by the plots' grid cells.
    pub fn grid(&self) -> (usize, usize) {
        self.plots().fold((1, 1), |(rows, cols), plot| {
            (rows.max(plot.cell.row + 1), cols.max(plot.cell.col + 1))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Plot x coordinate of a calendar date.
pub fn date_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Inverse of [`date_x`], rounding to the nearest day.
pub fn x_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}
