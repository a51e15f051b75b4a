//! Exhaustive ARIMA order search by minimum AIC.
//!
//! Every order in `p ∈ {0,1,2}, d ∈ {0,1}, q ∈ {0,1,2}` is fitted in a fixed
//! p-major order. A failed fit skips that candidate; ties on AIC keep the
//! earlier candidate.

use super::arima::CssFitter;
use super::{date_forecast, ArimaOrder, FitError, ForecastError, ForecastResult};
use crate::domain::RegularizedSeries;

const P_VALUES: [usize; 3] = [0, 1, 2];
const D_VALUES: [usize; 2] = [0, 1];
const Q_VALUES: [usize; 3] = [0, 1, 2];

/// A fitted model that can be ranked and extrapolated.
pub trait FittedModel {
    fn aic(&self) -> f64;

    /// Point forecasts for the next `horizon` steps, in original units.
    fn forecast(&self, horizon: usize) -> Vec<f64>;
}

/// Fits a single candidate order to a value sequence.
pub trait CandidateFitter {
    type Model: FittedModel;

    fn fit(&self, values: &[f64], order: ArimaOrder) -> Result<Self::Model, FitError>;
}

/// A successfully fitted candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCandidate<M> {
    pub order: ArimaOrder,
    pub aic: f64,
    pub model: M,
}

/// All 18 candidate orders in evaluation order.
pub fn candidate_orders() -> Vec<ArimaOrder> {
    P_VALUES
        .iter()
        .flat_map(|&p| {
            D_VALUES
                .iter()
                .flat_map(move |&d| Q_VALUES.iter().map(move |&q| ArimaOrder::new(p, d, q)))
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ArimaGridSearchForecaster<F = CssFitter> {
    fitter: F,
}

impl ArimaGridSearchForecaster {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: CandidateFitter> ArimaGridSearchForecaster<F> {
    pub fn with_fitter(fitter: F) -> Self {
        Self { fitter }
    }

    /// Fit every candidate and keep the one with the smallest AIC.
    pub fn search(&self, values: &[f64]) -> Result<ModelCandidate<F::Model>, ForecastError> {
        let orders = candidate_orders();
        let mut fitted = 0usize;

        let best = orders
            .iter()
            .filter_map(|&order| match self.fitter.fit(values, order) {
                Ok(model) => {
                    let aic = model.aic();
                    if aic.is_finite() {
                        fitted += 1;
                        tracing::debug!(%order, aic, "candidate fitted");
                        Some(ModelCandidate { order, aic, model })
                    } else {
                        tracing::debug!(%order, "candidate has non-finite AIC");
                        None
                    }
                }
                Err(err) => {
                    tracing::debug!(%order, error = %err, "candidate skipped");
                    None
                }
            })
            .fold(None, |best: Option<ModelCandidate<F::Model>>, candidate| match best {
                Some(current) if current.aic <= candidate.aic => Some(current),
                _ => Some(candidate),
            });

        match best {
            Some(candidate) => {
                tracing::info!(
                    order = %candidate.order,
                    aic = candidate.aic,
                    fitted,
                    tried = orders.len(),
                    "ARIMA grid search finished"
                );
                Ok(candidate)
            }
            None => {
                tracing::warn!(tried = orders.len(), "no ARIMA candidate could be fitted");
                Err(ForecastError::NoViableModel {
                    candidates: orders.len(),
                })
            }
        }
    }

    /// Search, then forecast `horizon` business days past the series end.
    pub fn select_and_forecast(
        &self,
        series: &RegularizedSeries,
        horizon: usize,
    ) -> Result<ForecastResult, ForecastError> {
        // Forecast dates hang off the last observation; an empty series
        // has none, so no candidate can be used whatever the fitter says.
        let Some(last_date) = series.last_date() else {
            return Err(ForecastError::NoViableModel {
                candidates: candidate_orders().len(),
            });
        };
        let best = self.search(series.values())?;

        let values = best.model.forecast(horizon);
        Ok(ForecastResult {
            points: date_forecast(last_date, values),
            chosen_order: Some(best.order),
            criterion: Some(best.aic),
            diagnostic: format!("Best ARIMA order: {}\nAIC: {:.2}", best.order, best.aic),
        })
    }
}
