//! Criterion benchmarks for the forecasting hot paths.
//!
//! 1. Business-day regularisation of the closing series
//! 2. AR(1) fit and forecast
//! 3. Full 18-candidate ARIMA grid search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use stockscope_core::{
    ArimaGridSearchForecaster, AutoregressiveForecaster, Observation, TimeSeriesStore,
    FORECAST_HORIZON,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_store(n: usize) -> TimeSeriesStore {
    let base = NaiveDate::from_ymd_opt(2013, 2, 8).unwrap();
    let observations = (0..n)
        .map(|i| {
            let close = 150.0 + (i as f64 * 0.1).sin() * 8.0 + (i as f64 * 0.37).cos();
            Observation {
                date: base + chrono::Duration::days(i as i64 * 7 / 5),
                open: close - 0.2,
                high: close + 1.0,
                low: close - 1.0,
                close,
            }
        })
        .collect();
    TimeSeriesStore::from_observations("IBM", observations).unwrap()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_regularize(c: &mut Criterion) {
    let mut group = c.benchmark_group("closing_series");
    for &n in &[252, 1259] {
        let store = make_store(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| black_box(store.closing_series()));
        });
    }
    group.finish();
}

fn bench_autoregressive(c: &mut Criterion) {
    let series = make_store(1259).closing_series();
    let forecaster = AutoregressiveForecaster::new();
    c.bench_function("ar1_fit_forecast", |b| {
        b.iter(|| {
            let fitted = forecaster.fit(black_box(&series)).unwrap();
            black_box(forecaster.forecast(&fitted, FORECAST_HORIZON))
        });
    });
}

fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("arima_grid_search");
    group.sample_size(10);
    for &n in &[252, 1259] {
        let series = make_store(n).closing_series();
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, series| {
            let forecaster = ArimaGridSearchForecaster::new();
            b.iter(|| black_box(forecaster.select_and_forecast(series, FORECAST_HORIZON)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_regularize, bench_autoregressive, bench_grid_search);
criterion_main!(benches);
