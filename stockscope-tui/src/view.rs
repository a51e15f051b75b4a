//! View identifiers and the click-region registry.
//!
//! Regions are expressed in normalised figure coordinates (`0..1`, origin
//! top-left) so the table is built once at startup and never depends on the
//! terminal size. The figure's left part is the main drawing area; the
//! thumbnails sit in a two-column grid on the right.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::views::{self, RenderFn};

/// The view currently drawn in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Raw,
    MovingAverage,
    Autocorrelation,
    Autoregressive,
    Arima,
}

impl ViewState {
    pub const ALL: [ViewState; 5] = [
        ViewState::Raw,
        ViewState::MovingAverage,
        ViewState::Autocorrelation,
        ViewState::Autoregressive,
        ViewState::Arima,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewState::Raw => "Raw",
            ViewState::MovingAverage => "MA",
            ViewState::Autocorrelation => "ACF/PACF",
            ViewState::Autoregressive => "AR",
            ViewState::Arima => "ARIMA",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point in normalised figure coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in normalised figure coordinates.
///
/// Containment is half-open so adjacent regions never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, at: Location) -> bool {
        at.x >= self.x && at.x < self.x + self.width && at.y >= self.y && at.y < self.y + self.height
    }
}

/// Main drawing area: left 60% of the figure.
pub const MAIN_REGION: NormRect = NormRect::new(0.05, 0.05, 0.6, 0.85);

const THUMB_LEFT: f64 = 0.7;
const THUMB_WIDTH: f64 = 0.125;
const THUMB_TOP: f64 = 0.1;
const THUMB_SPAN: f64 = 0.8;

/// One registered view: where to click and how to draw it.
#[derive(Clone, Copy)]
pub struct ViewEntry {
    pub view: ViewState,
    pub region: NormRect,
    pub render: RenderFn,
}

impl fmt::Debug for ViewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewEntry")
            .field("view", &self.view)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// Static region → view table.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    entries: Vec<ViewEntry>,
}

impl ViewRegistry {
    /// Lay `views` out row-major in two thumbnail columns.
    ///
    /// Four views give the 2×2 grid, five a 2×3 grid with one empty slot.
    /// Repeated views keep their first slot.
    pub fn with_views(views: &[ViewState]) -> Self {
        let mut unique: Vec<ViewState> = Vec::with_capacity(views.len());
        for view in views {
            if !unique.contains(view) {
                unique.push(*view);
            }
        }

        let rows = unique.len().div_ceil(2).max(1);
        let row_height = THUMB_SPAN / rows as f64;
        let entries = unique
            .into_iter()
            .enumerate()
            .map(|(i, view)| {
                let (row, col) = (i / 2, i % 2);
                ViewEntry {
                    view,
                    region: NormRect::new(
                        THUMB_LEFT + col as f64 * THUMB_WIDTH,
                        THUMB_TOP + row as f64 * row_height,
                        THUMB_WIDTH,
                        row_height,
                    ),
                    render: views::render_fn(view),
                }
            })
            .collect();
        Self { entries }
    }

    /// Which view's thumbnail contains `at`, if any.
    pub fn resolve(&self, at: Location) -> Option<ViewState> {
        self.entries
            .iter()
            .find(|entry| entry.region.contains(at))
            .map(|entry| entry.view)
    }

    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub fn get(&self, view: ViewState) -> Option<&ViewEntry> {
        self.entries.iter().find(|entry| entry.view == view)
    }

    /// The `index`-th registered view (0-based), as numbered on screen.
    pub fn nth(&self, index: usize) -> Option<ViewState> {
        self.entries.get(index).map(|entry| entry.view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::with_views(&ViewState::ALL)
    }
}
