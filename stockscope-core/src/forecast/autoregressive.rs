//! AR(1) forecaster — `y_t = c + φ·y_{t−1} + ε_t` fitted by least squares.

use chrono::NaiveDate;

use super::{date_forecast, FitError, ForecastError, ForecastResult};
use crate::domain::RegularizedSeries;

/// A fitted AR(1) model, anchored at the last observation it saw.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedAr {
    pub intercept: f64,
    /// Lag-1 coefficient φ.
    pub coefficient: f64,
    /// Residual variance (SSR / n).
    pub sigma2: f64,
    pub nobs: usize,
    pub last_date: NaiveDate,
    pub last_value: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AutoregressiveForecaster;

impl AutoregressiveForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Regress each value on its predecessor plus an intercept.
    pub fn fit(&self, series: &RegularizedSeries) -> Result<FittedAr, ForecastError> {
        let values = series.values();
        let (Some(last_date), Some(&last_value)) = (series.last_date(), values.last()) else {
            return Err(FitError::InsufficientData { needed: 2, got: 0 }.into());
        };
        if values.len() < 2 {
            return Err(FitError::InsufficientData {
                needed: 2,
                got: values.len(),
            }
            .into());
        }

        let x = &values[..values.len() - 1];
        let y = &values[1..];
        let m = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / m;
        let y_mean = y.iter().sum::<f64>() / m;

        let sxx: f64 = x.iter().map(|v| (v - x_mean).powi(2)).sum();
        let sxy: f64 = x
            .iter()
            .zip(y)
            .map(|(a, b)| (a - x_mean) * (b - y_mean))
            .sum();
        let scale: f64 = x.iter().map(|v| v * v).sum();
        if !sxx.is_finite() || sxx <= 1e-12 * scale.max(f64::MIN_POSITIVE) {
            return Err(FitError::Singular.into());
        }

        let coefficient = sxy / sxx;
        let intercept = y_mean - coefficient * x_mean;
        let ssr: f64 = x
            .iter()
            .zip(y)
            .map(|(a, b)| (b - intercept - coefficient * a).powi(2))
            .sum();
        if !coefficient.is_finite() || !intercept.is_finite() {
            return Err(FitError::NonFinite.into());
        }

        let fitted = FittedAr {
            intercept,
            coefficient,
            sigma2: ssr / m,
            nobs: x.len(),
            last_date,
            last_value,
        };
        tracing::info!(
            coefficient = fitted.coefficient,
            intercept = fitted.intercept,
            nobs = fitted.nobs,
            "fitted AR(1)"
        );
        Ok(fitted)
    }

    /// Iterate the fitted recursion `horizon` steps past the last observation.
    pub fn forecast(&self, fitted: &FittedAr, horizon: usize) -> ForecastResult {
        let values: Vec<f64> = std::iter::successors(Some(fitted.last_value), |prev| {
            Some(fitted.intercept + fitted.coefficient * prev)
        })
        .skip(1)
        .take(horizon)
        .collect();

        let coef = fitted.coefficient;
        ForecastResult {
            points: date_forecast(fitted.last_date, values),
            chosen_order: None,
            criterion: None,
            diagnostic: format!(
                "AR(1) coefficient: {coef:.3}\n\
                 Interpretation: Tomorrow's price is roughly {coef:.3} times today's price plus noise."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::calendar::business_days_between;

    fn series_from(values: Vec<f64>) -> RegularizedSeries {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let dates: Vec<NaiveDate> = business_days_between(start, end).take(values.len()).collect();
        RegularizedSeries::new(dates, values).unwrap()
    }

    #[test]
    fn recovers_exact_linear_recursion() {
        // y_t = 2 + 0.5 y_{t-1}, started away from the fixed point at 4.
        let values: Vec<f64> = std::iter::successors(Some(20.0), |v| Some(2.0 + 0.5 * v))
            .take(12)
            .collect();
        let forecaster = AutoregressiveForecaster::new();
        let fitted = forecaster.fit(&series_from(values)).unwrap();
        assert!((fitted.coefficient - 0.5).abs() < 1e-9);
        assert!((fitted.intercept - 2.0).abs() < 1e-9);
        assert!(fitted.sigma2 < 1e-12);
    }

    #[test]
    fn forecast_continues_recursion() {
        let forecaster = AutoregressiveForecaster::new();
        let fitted = FittedAr {
            intercept: 1.0,
            coefficient: 0.5,
            sigma2: 0.0,
            nobs: 10,
            last_date: NaiveDate::from_ymd_opt(2018, 2, 7).unwrap(),
            last_value: 10.0,
        };
        let result = forecaster.forecast(&fitted, 5);
        let values: Vec<f64> = result.points.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![6.0, 4.0, 3.0, 2.5, 2.25]);
        assert_eq!(
            result.points[2].0,
            NaiveDate::from_ymd_opt(2018, 2, 12).unwrap()
        );
    }

    #[test]
    fn diagnostic_reports_three_decimals() {
        let forecaster = AutoregressiveForecaster::new();
        let fitted = FittedAr {
            intercept: 0.0,
            coefficient: 0.98765,
            sigma2: 1.0,
            nobs: 10,
            last_date: NaiveDate::from_ymd_opt(2018, 2, 7).unwrap(),
            last_value: 100.0,
        };
        let text = forecaster.forecast(&fitted, 5).diagnostic;
        assert!(text.starts_with("AR(1) coefficient: 0.988\n"));
        assert!(text.contains("roughly 0.988 times today's price plus noise"));
    }

    #[test]
    fn single_point_is_insufficient() {
        let err = AutoregressiveForecaster::new()
            .fit(&series_from(vec![100.0]))
            .unwrap_err();
        assert_eq!(
            err,
            ForecastError::Fitting(FitError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn constant_series_is_singular() {
        let err = AutoregressiveForecaster::new()
            .fit(&series_from(vec![0.1; 6]))
            .unwrap_err();
        assert_eq!(err, ForecastError::Fitting(FitError::Singular));
    }
}
