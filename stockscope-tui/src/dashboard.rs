//! Dashboard — owns the scene and switches between views.
//!
//! The active view is a field mutated only by [`Dashboard::on_click`],
//! [`Dashboard::select_nth`] and [`Dashboard::render`]. Every render starts
//! with an explicit [`Scene::clear`], so nothing drawn by a previous view
//! survives into the next one.

use stockscope_core::{ArimaGridSearchForecaster, AutoregressiveForecaster, TimeSeriesStore};

use crate::error::RenderError;
use crate::preview::{self, Preview};
use crate::scene::{Layer, Scene};
use crate::theme::Theme;
use crate::view::{Location, ViewRegistry, ViewState};
use crate::views::RenderContext;

/// Tunables shared by the render functions and thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub moving_average_window: usize,
    pub acf_lags: usize,
    pub preview_tail: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            moving_average_window: 20,
            acf_lags: 40,
            preview_tail: 50,
        }
    }
}

pub struct Dashboard {
    store: TimeSeriesStore,
    settings: ViewSettings,
    theme: Theme,
    registry: ViewRegistry,
    previews: Vec<Preview>,
    autoregressive: AutoregressiveForecaster,
    arima: ArimaGridSearchForecaster,
    scene: Scene,
    current: ViewState,
    /// Every console line printed by forecast views, in order.
    transcript: Vec<String>,
}

impl Dashboard {
    /// Build the registry and thumbnails, then draw the first view.
    ///
    /// The first view is `Raw` when registered, else the first registered one.
    pub fn new(store: TimeSeriesStore, settings: ViewSettings, views: &[ViewState]) -> Self {
        let theme = Theme::default();
        let registry = ViewRegistry::with_views(views);
        let previews = preview::build_all(&registry, &store, &settings, &theme);
        let current = if registry.get(ViewState::Raw).is_some() {
            ViewState::Raw
        } else {
            registry.nth(0).unwrap_or(ViewState::Raw)
        };

        let mut dashboard = Self {
            store,
            settings,
            theme,
            registry,
            previews,
            autoregressive: AutoregressiveForecaster::new(),
            arima: ArimaGridSearchForecaster::new(),
            scene: Scene::new(),
            current,
            transcript: Vec::new(),
        };
        dashboard.render(current);
        dashboard
    }

    /// Dispatch a click. Outside every thumbnail nothing changes.
    pub fn on_click(&mut self, at: Location) -> Option<ViewState> {
        let view = self.registry.resolve(at)?;
        self.activate(view);
        Some(view)
    }

    /// Same as clicking the `index`-th thumbnail.
    pub fn select_nth(&mut self, index: usize) -> Option<ViewState> {
        let view = self.registry.nth(index)?;
        self.activate(view);
        Some(view)
    }

    fn activate(&mut self, view: ViewState) {
        if view != self.current {
            tracing::info!(from = %self.current, to = %view, "switching view");
        }
        self.current = view;
        self.render(view);
    }

    /// Retire the previous render and draw `view` from scratch.
    ///
    /// A failing render leaves a single message layer instead of a plot.
    pub fn render(&mut self, view: ViewState) {
        let retired = self.scene.clear();
        self.scene.set_view(view);
        tracing::debug!(
            %view,
            retired,
            generation = self.scene.generation(),
            "cleared scene"
        );

        let outcome = match self.registry.get(view) {
            Some(entry) => {
                let ctx = RenderContext {
                    store: &self.store,
                    settings: &self.settings,
                    theme: &self.theme,
                    autoregressive: &self.autoregressive,
                    arima: &self.arima,
                };
                (entry.render)(&ctx, &mut self.scene)
            }
            None => Err(RenderError::Unregistered(view)),
        };

        match outcome {
            Ok(()) => {
                for line in self.scene.console() {
                    tracing::info!(target: "stockscope::console", "{line}");
                }
                self.transcript.extend_from_slice(self.scene.console());
            }
            Err(err) => {
                tracing::warn!(%view, error = %err, "render failed");
                self.scene.clear();
                self.scene.set_view(view);
                self.scene.push(Layer::Message(err.to_string()));
            }
        }
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    pub fn store(&self) -> &TimeSeriesStore {
        &self.store
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}
