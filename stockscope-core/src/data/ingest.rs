//! CSV ingestion of the raw daily feed.
//!
//! The feed carries many instruments; filtering down to one happens in
//! [`TimeSeriesStore::load`](super::TimeSeriesStore::load). Extra columns are
//! ignored and blank prices deserialize to `None`.

use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use super::DataError;

/// One record of the raw feed, before filtering and date parsing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(rename = "Name", alias = "name", alias = "symbol")]
    pub name: String,
}

/// Read every record of a CSV feed from disk.
pub fn read_csv(path: &Path) -> Result<Vec<RawRow>, DataError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    collect_rows(reader)
}

/// Read every record of a CSV feed from any reader.
pub fn read_csv_from<R: Read>(input: R) -> Result<Vec<RawRow>, DataError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawRow>, DataError> {
    let rows = reader
        .deserialize::<RawRow>()
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(rows = rows.len(), "read raw feed");
    Ok(rows)
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a feed date. Accepts ISO dates, slash dates and midnight timestamps.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}
