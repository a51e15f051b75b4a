//! ARIMA(p, d, q) fitted by conditional sum of squares (CSS).
//!
//! The series is differenced `d` times; the ARMA(p, q) part is fitted on the
//! differenced values with a Nelder–Mead search over
//! `[mean?, φ_1..φ_p, θ_1..θ_q]`. A mean term is estimated only when
//! `d == 0`. Stationarity and invertibility are enforced inside the
//! objective and re-checked at the optimum.

use super::grid_search::{CandidateFitter, FittedModel};
use super::optimize::NelderMead;
use super::{ArimaOrder, FitError};

/// Fits one candidate order by CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssFitter {
    pub optimizer: NelderMead,
}

/// A fitted ARIMA model, holding enough history to forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedArima {
    pub order: ArimaOrder,
    /// Mean of the differenced series (zero when `d > 0`).
    pub mean: f64,
    pub ar: Vec<f64>,
    pub ma: Vec<f64>,
    pub sigma2: f64,
    pub aic: f64,
    /// Original (undifferenced) values.
    history: Vec<f64>,
    differenced: Vec<f64>,
    residuals: Vec<f64>,
}

impl FittedArima {
    /// Number of estimated parameters, σ² included.
    pub fn parameter_count(order: ArimaOrder) -> usize {
        order.p + order.q + usize::from(order.d == 0) + 1
    }
}

impl FittedModel for FittedArima {
    fn aic(&self) -> f64 {
        self.aic
    }

    fn forecast(&self, horizon: usize) -> Vec<f64> {
        let mut w = self.differenced.clone();
        let mut e = self.residuals.clone();
        for _ in 0..horizon {
            let t = w.len();
            let next = self.mean + arma_step(&w, &e, t, self.mean, &self.ar, &self.ma);
            w.push(next);
            e.push(0.0);
        }
        let diff_forecast = w.split_off(self.differenced.len());
        integrate(&diff_forecast, &self.history, self.order.d)
    }
}

impl CandidateFitter for CssFitter {
    type Model = FittedArima;

    fn fit(&self, values: &[f64], order: ArimaOrder) -> Result<FittedArima, FitError> {
        let needed = order.d + order.p + order.q + 2;
        if values.len() < needed {
            return Err(FitError::InsufficientData {
                needed,
                got: values.len(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(FitError::NonFinite);
        }

        let w = difference(values, order.d);
        let with_mean = order.d == 0;
        let sample_mean = w.iter().sum::<f64>() / w.len() as f64;
        let (p, q) = (order.p, order.q);

        let unpack = |params: &[f64]| -> (f64, Vec<f64>, Vec<f64>) {
            let offset = usize::from(with_mean);
            let mean = if with_mean { params[0] } else { 0.0 };
            let ar = params[offset..offset + p].to_vec();
            let ma = params[offset + p..offset + p + q].to_vec();
            (mean, ar, ma)
        };

        let mut start = Vec::with_capacity(p + q + 1);
        let mut steps = Vec::with_capacity(p + q + 1);
        if with_mean {
            start.push(sample_mean);
            steps.push(0.05 * sample_mean.abs().max(1.0));
        }
        for i in 0..p {
            start.push(0.1 / (i + 1) as f64);
            steps.push(0.1);
        }
        for i in 0..q {
            start.push(0.1 / (i + 1) as f64);
            steps.push(0.1);
        }

        let params = if start.is_empty() {
            Vec::new()
        } else {
            let objective = |params: &[f64]| {
                let (mean, ar, ma) = unpack(params);
                if !is_stationary(&ar) || !is_invertible(&ma) {
                    return f64::INFINITY;
                }
                css(&w, mean, &ar, &ma).0
            };
            let minimum = self.optimizer.minimize(objective, &start, &steps);
            if !minimum.converged {
                return Err(FitError::NotConverged {
                    iterations: minimum.iterations,
                });
            }
            minimum.point
        };

        let (mean, ar, ma) = unpack(&params);
        if !is_stationary(&ar) {
            return Err(FitError::NonStationary);
        }
        if !is_invertible(&ma) {
            return Err(FitError::NonInvertible);
        }

        let (sum_sq, residuals) = css(&w, mean, &ar, &ma);
        let n_eff = (w.len() - p) as f64;
        let sigma2 = sum_sq / n_eff;
        if !sigma2.is_finite() || sigma2 <= 0.0 {
            return Err(FitError::NonFinite);
        }

        let log_likelihood =
            -0.5 * n_eff * (1.0 + (2.0 * std::f64::consts::PI * sigma2).ln());
        let k = FittedArima::parameter_count(order) as f64;
        let aic = -2.0 * log_likelihood + 2.0 * k;
        if !aic.is_finite() {
            return Err(FitError::NonFinite);
        }

        Ok(FittedArima {
            order,
            mean,
            ar,
            ma,
            sigma2,
            aic,
            history: values.to_vec(),
            differenced: w,
            residuals,
        })
    }
}

/// One-step ARMA prediction (excluding the mean) for index `t`.
///
/// Values and shocks before the start of the sample count as zero deviation.
fn arma_step(w: &[f64], e: &[f64], t: usize, mean: f64, ar: &[f64], ma: &[f64]) -> f64 {
    let ar_part: f64 = ar
        .iter()
        .enumerate()
        .filter_map(|(i, phi)| t.checked_sub(i + 1).map(|k| phi * (w[k] - mean)))
        .sum();
    let ma_part: f64 = ma
        .iter()
        .enumerate()
        .filter_map(|(j, theta)| t.checked_sub(j + 1).map(|k| theta * e[k]))
        .sum();
    ar_part + ma_part
}

/// Conditional sum of squares, conditioning on the first `p` values.
fn css(w: &[f64], mean: f64, ar: &[f64], ma: &[f64]) -> (f64, Vec<f64>) {
    let p = ar.len();
    let mut residuals = vec![0.0; w.len()];
    let mut sum_sq = 0.0;
    for t in p..w.len() {
        let prediction = mean + arma_step(w, &residuals, t, mean, ar, ma);
        let err = w[t] - prediction;
        residuals[t] = err;
        sum_sq += err * err;
    }
    (sum_sq, residuals)
}

/// Apply first differences `d` times.
pub fn difference(values: &[f64], d: usize) -> Vec<f64> {
    (0..d).fold(values.to_vec(), |acc, _| {
        acc.windows(2).map(|w| w[1] - w[0]).collect()
    })
}

/// Undo `d` rounds of differencing on a forecast, anchored on `history`.
pub fn integrate(forecast: &[f64], history: &[f64], d: usize) -> Vec<f64> {
    // Last value of each differencing stage, stage 0 = the original series.
    let anchors: Vec<f64> = (0..d)
        .map(|stage| difference(history, stage).last().copied().unwrap_or(0.0))
        .collect();

    anchors.iter().rev().fold(forecast.to_vec(), |inner, &anchor| {
        inner
            .iter()
            .scan(anchor, |level, step| {
                *level += step;
                Some(*level)
            })
            .collect()
    })
}

/// Levinson step-down (Schur–Cohn) test: the polynomial
/// `1 − c_1 z − … − c_k z^k` has all roots outside the unit circle.
fn roots_outside_unit_circle(coefficients: &[f64]) -> bool {
    let mut a = coefficients.to_vec();
    while let Some(&k) = a.last() {
        if !k.is_finite() || k.abs() >= 1.0 {
            return false;
        }
        let m = a.len();
        let denom = 1.0 - k * k;
        a = (0..m - 1)
            .map(|j| (a[j] + k * a[m - 2 - j]) / denom)
            .collect();
    }
    true
}

pub fn is_stationary(ar: &[f64]) -> bool {
    roots_outside_unit_circle(ar)
}

/// MA polynomial `1 + θ_1 z + …` is invertible.
pub fn is_invertible(ma: &[f64]) -> bool {
    let negated: Vec<f64> = ma.iter().map(|t| -t).collect();
    roots_outside_unit_circle(&negated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ar1_series(phi: f64, mean: f64, n: usize) -> Vec<f64> {
        let mut state: u64 = 7;
        let mut x = vec![mean];
        for _ in 1..n {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let shock = ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            let prev = *x.last().unwrap();
            x.push(mean + phi * (prev - mean) + shock);
        }
        x
    }

    #[test]
    fn difference_and_integrate_round_trip() {
        let history = [1.0, 4.0, 9.0, 16.0, 25.0];
        assert_eq!(difference(&history, 1), vec![3.0, 5.0, 7.0, 9.0]);
        assert_eq!(difference(&history, 2), vec![2.0, 2.0, 2.0]);
        // Second differences stay 2 → continue the squares.
        assert_eq!(integrate(&[2.0, 2.0], &history, 2), vec![36.0, 49.0]);
        assert_eq!(integrate(&[1.0, 1.0], &history, 0), vec![1.0, 1.0]);
    }

    #[test]
    fn stationarity_region() {
        assert!(is_stationary(&[]));
        assert!(is_stationary(&[0.5]));
        assert!(!is_stationary(&[1.0]));
        assert!(!is_stationary(&[-1.2]));
        // AR(2) triangle: φ1 + φ2 < 1, φ2 − φ1 < 1, |φ2| < 1
        assert!(is_stationary(&[0.5, 0.3]));
        assert!(!is_stationary(&[0.7, 0.4]));
        assert!(!is_stationary(&[-0.7, 0.4]));
        assert!(!is_stationary(&[0.1, -1.0]));
    }

    #[test]
    fn invertibility_region() {
        assert!(is_invertible(&[0.4]));
        assert!(is_invertible(&[-0.9]));
        assert!(!is_invertible(&[1.1]));
        assert!(is_invertible(&[0.5, 0.3]));
        assert!(!is_invertible(&[-0.7, -0.4]));
    }

    #[test]
    fn recovers_ar1_coefficient() {
        let values = ar1_series(0.7, 50.0, 800);
        let fit = CssFitter::default()
            .fit(&values, ArimaOrder::new(1, 0, 0))
            .unwrap();
        assert!((fit.ar[0] - 0.7).abs() < 0.08, "phi = {}", fit.ar[0]);
        assert!((fit.mean - 50.0).abs() < 0.2, "mean = {}", fit.mean);
        assert!(fit.aic.is_finite());
    }

    #[test]
    fn forecast_of_white_noise_model_is_the_mean() {
        let values = ar1_series(0.0, 10.0, 200);
        let fit = CssFitter::default()
            .fit(&values, ArimaOrder::new(0, 0, 0))
            .unwrap();
        let forecast = fit.forecast(3);
        assert_eq!(forecast.len(), 3);
        assert!(forecast.iter().all(|v| (v - fit.mean).abs() < 1e-12));
    }

    #[test]
    fn random_walk_forecast_is_flat_at_last_value() {
        let values = ar1_series(0.3, 0.0, 100)
            .iter()
            .scan(100.0, |acc, step| {
                *acc += step;
                Some(*acc)
            })
            .collect::<Vec<_>>();
        let fit = CssFitter::default()
            .fit(&values, ArimaOrder::new(0, 1, 0))
            .unwrap();
        let last = *values.last().unwrap();
        assert!(fit.forecast(5).iter().all(|v| (v - last).abs() < 1e-12));
    }

    #[test]
    fn too_short_series_is_rejected() {
        let err = CssFitter::default()
            .fit(&[1.0, 2.0, 3.0], ArimaOrder::new(2, 1, 2))
            .unwrap_err();
        assert_eq!(err, FitError::InsufficientData { needed: 7, got: 3 });
    }

    #[test]
    fn constant_series_has_no_likelihood() {
        let err = CssFitter::default()
            .fit(&[5.0; 30], ArimaOrder::new(0, 1, 0))
            .unwrap_err();
        assert_eq!(err, FitError::NonFinite);
    }

    #[test]
    fn aic_counts_sigma_squared() {
        assert_eq!(FittedArima::parameter_count(ArimaOrder::new(0, 0, 0)), 2);
        assert_eq!(FittedArima::parameter_count(ArimaOrder::new(2, 1, 2)), 5);
    }
}
