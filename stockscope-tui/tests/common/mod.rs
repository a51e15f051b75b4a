//! Shared fixtures for dashboard tests.

use chrono::{Datelike, NaiveDate, Weekday};
use stockscope_core::{Observation, TimeSeriesStore};

/// `n` weekday observations of a gently trending, oscillating price.
pub fn sample_store(n: usize) -> TimeSeriesStore {
    let mut date = NaiveDate::from_ymd_opt(2017, 1, 3).unwrap();
    let mut obs = Vec::with_capacity(n);
    while obs.len() < n {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let t = obs.len() as f64;
            let close = 150.0 + (t * 0.15).sin() * 6.0 + (t * 0.53).cos() + t * 0.02;
            obs.push(Observation {
                date,
                open: close - 0.4,
                high: close + 1.2,
                low: close - 1.1,
                close,
            });
        }
        date = date.succ_opt().unwrap();
    }
    TimeSeriesStore::from_observations("IBM", obs).unwrap()
}
