//! Render-level failures, caught by the dashboard and shown in place.

use thiserror::Error;

use stockscope_core::ForecastError;

use crate::view::ViewState;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("{view} view needs at least {needed} observations, have {got}")]
    TooFewObservations {
        view: ViewState,
        needed: usize,
        got: usize,
    },

    #[error("cannot estimate the {kind} of {field} prices (series is constant)")]
    NoCorrelogram {
        field: &'static str,
        kind: &'static str,
    },

    #[error("{0} view is not registered on this dashboard")]
    Unregistered(ViewState),
}
