//! StockScope Core — observation store, calendar, indicators and forecasting.
//!
//! This crate holds everything the dashboard computes:
//! - Domain types (observations, business-day regularised series)
//! - CSV ingestion and the single-instrument `TimeSeriesStore`
//! - Monday–Friday business-day calendar (no holiday awareness)
//! - Indicators: rolling mean, ACF and PACF correlograms
//! - Forecasting: AR(1) by least squares and an exhaustive ARIMA order search
//!   scored by AIC

pub mod data;
pub mod domain;
pub mod forecast;
pub mod indicators;

pub use data::{DataError, TimeSeriesStore};
pub use domain::{Observation, PriceField, RegularizedSeries};
pub use forecast::{
    ArimaGridSearchForecaster, ArimaOrder, AutoregressiveForecaster, ForecastError,
    ForecastResult, FORECAST_HORIZON,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types the dashboard holds across renders are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Observation>();
        require_sync::<Observation>();
        require_send::<TimeSeriesStore>();
        require_sync::<TimeSeriesStore>();
        require_send::<RegularizedSeries>();
        require_sync::<RegularizedSeries>();
        require_send::<ForecastResult>();
        require_sync::<ForecastResult>();
        require_send::<ForecastError>();
        require_sync::<ForecastError>();
        require_send::<ArimaGridSearchForecaster>();
        require_sync::<ArimaGridSearchForecaster>();
    }
}
