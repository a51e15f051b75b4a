//! Forecasting engine: AR(1) and an exhaustive ARIMA order search.
//!
//! Both strategies consume a business-day [`RegularizedSeries`] and produce a
//! [`ForecastResult`] of exactly `horizon` points dated on the business days
//! following the last observation.

pub mod arima;
pub mod autoregressive;
pub mod grid_search;
pub mod optimize;

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::data::calendar::next_business_days;

pub use arima::{CssFitter, FittedArima};
pub use autoregressive::{AutoregressiveForecaster, FittedAr};
pub use grid_search::{
    candidate_orders, ArimaGridSearchForecaster, CandidateFitter, FittedModel, ModelCandidate,
};

/// Number of business days every forecast view extrapolates.
pub const FORECAST_HORIZON: usize = 5;

/// Reasons a single model fit can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("lagged regressor has zero variance")]
    Singular,

    #[error("objective is not finite at the optimum")]
    NonFinite,

    #[error("autoregressive part is not stationary")]
    NonStationary,

    #[error("moving-average part is not invertible")]
    NonInvertible,

    #[error("optimiser did not converge within {iterations} iterations")]
    NotConverged { iterations: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("model fit failed: {0}")]
    Fitting(#[from] FitError),

    #[error("no ARIMA candidate could be fitted ({candidates} orders tried)")]
    NoViableModel { candidates: usize },
}

/// ARIMA order `(p, d, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArimaOrder {
    pub p: usize,
    pub d: usize,
    pub q: usize,
}

impl ArimaOrder {
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

/// A dated point forecast plus the text shown next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub points: Vec<(NaiveDate, f64)>,
    /// Present only for the ARIMA search.
    pub chosen_order: Option<ArimaOrder>,
    pub criterion: Option<f64>,
    pub diagnostic: String,
}

impl ForecastResult {
    /// One `date  price` line per horizon step, ascending.
    pub fn console_lines(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|(date, price)| format!("{date}  {price:.6}"))
            .collect()
    }
}

/// Pair forecast values with the business days after `last_date`.
pub(crate) fn date_forecast(last_date: NaiveDate, values: Vec<f64>) -> Vec<(NaiveDate, f64)> {
    next_business_days(last_date, values.len())
        .into_iter()
        .zip(values)
        .collect()
}
