//! Simple Moving Average (SMA).
//!
//! Rolling mean over a lookback window.
//! Lookback: period - 1 (first valid value at index period-1). A window
//! containing a NaN yields NaN, matching a strict `min_periods == period`.

#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    pub fn compute(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        let mut sum = 0.0;
        let mut nan_in_window = false;
        for v in values.iter().take(self.period) {
            if v.is_nan() {
                nan_in_window = true;
            }
            sum += v;
        }

        if !nan_in_window {
            result[self.period - 1] = sum / self.period as f64;
        }

        for i in self.period..n {
            let leaving = values[i - self.period];
            let entering = values[i];
            sum = sum - leaving + entering;

            // A NaN poisons the running sum; rescan the window instead.
            if entering.is_nan() || leaving.is_nan() || nan_in_window {
                nan_in_window = false;
                sum = 0.0;
                for v in &values[(i + 1 - self.period)..=i] {
                    if v.is_nan() {
                        nan_in_window = true;
                    }
                    sum += v;
                }
                if nan_in_window {
                    continue;
                }
            }

            result[i] = sum / self.period as f64;
        }

        result
    }
}
