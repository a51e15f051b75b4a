//! End-to-end tests: CSV on disk → store → regularised series → forecasts.

use std::io::Write;

use chrono::{Datelike, NaiveDate, Weekday};
use stockscope_core::data::{read_csv, DataError, TimeSeriesStore};
use stockscope_core::{
    ArimaGridSearchForecaster, AutoregressiveForecaster, ForecastError, PriceField,
    FORECAST_HORIZON,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Writes a multi-instrument feed with `days` business days per instrument.
fn write_feed(days: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "date,open,high,low,close,volume,Name").unwrap();

    let mut date = d("2013-02-08");
    let mut written = 0;
    while written < days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let t = written as f64;
            let ibm = 150.0 + (t * 0.2).sin() * 4.0 + t * 0.01;
            let aapl = 60.0 + (t * 0.1).cos() * 2.0;
            writeln!(
                file,
                "{date},{:.2},{:.2},{:.2},{:.2},1000,IBM",
                ibm - 0.5,
                ibm + 1.0,
                ibm - 1.0,
                ibm
            )
            .unwrap();
            writeln!(file, "{date},{aapl:.2},{aapl:.2},{aapl:.2},{aapl:.2},500,AAPL").unwrap();
            written += 1;
        }
        date = date.succ_opt().unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn feed_loads_one_instrument_in_date_order() {
    let feed = write_feed(120);
    let rows = read_csv(feed.path()).unwrap();
    assert_eq!(rows.len(), 240);

    let store = TimeSeriesStore::load(rows, "IBM").unwrap();
    assert_eq!(store.len(), 120);
    assert_eq!(store.first_date(), Some(d("2013-02-08")));
    assert!(store.dates().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(store.tail(50).len(), 50);
    assert!(store.column(PriceField::Open).iter().all(|v| v.is_finite()));
}

#[test]
fn missing_instrument_is_reported() {
    let feed = write_feed(10);
    let rows = read_csv(feed.path()).unwrap();
    let err = TimeSeriesStore::load(rows, "MSFT").unwrap_err();
    assert!(matches!(err, DataError::NoObservations { .. }));
}

#[test]
fn missing_file_is_a_csv_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_csv(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, DataError::Csv(_)));
}

#[test]
fn both_forecasters_extrapolate_five_business_days() {
    let feed = write_feed(200);
    let store = TimeSeriesStore::load(read_csv(feed.path()).unwrap(), "IBM").unwrap();
    let series = store.closing_series();
    let last = series.last_date().unwrap();

    let ar = AutoregressiveForecaster::new();
    let fitted = ar.fit(&series).unwrap();
    let ar_result = ar.forecast(&fitted, FORECAST_HORIZON);

    let arima = ArimaGridSearchForecaster::new()
        .select_and_forecast(&series, FORECAST_HORIZON)
        .unwrap();

    for result in [&ar_result, &arima] {
        assert_eq!(result.points.len(), FORECAST_HORIZON);
        assert!(result.points[0].0 > last);
        assert!(result
            .points
            .iter()
            .all(|(date, v)| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                && v.is_finite()));
        assert!(result.points.windows(2).all(|w| w[0].0 < w[1].0));
    }
    assert!(arima.chosen_order.is_some());
    assert!(arima.diagnostic.starts_with("Best ARIMA order: ("));
    assert!(ar_result.diagnostic.starts_with("AR(1) coefficient: "));
}

#[test]
fn grid_search_is_deterministic() {
    let feed = write_feed(150);
    let store = TimeSeriesStore::load(read_csv(feed.path()).unwrap(), "IBM").unwrap();
    let series = store.closing_series();

    let first = ArimaGridSearchForecaster::new()
        .select_and_forecast(&series, FORECAST_HORIZON)
        .unwrap();
    let second = ArimaGridSearchForecaster::new()
        .select_and_forecast(&series, FORECAST_HORIZON)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_close_has_no_viable_arima() {
    let feed = write_feed(1);
    let store = TimeSeriesStore::load(read_csv(feed.path()).unwrap(), "IBM").unwrap();
    let err = ArimaGridSearchForecaster::new()
        .select_and_forecast(&store.closing_series(), FORECAST_HORIZON)
        .unwrap_err();
    assert_eq!(err, ForecastError::NoViableModel { candidates: 18 });
}
