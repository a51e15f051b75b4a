//! Structured error types for data loading.
//!
//! Every variant is fatal at startup: the dashboard refuses to open on a feed
//! it cannot turn into a clean observation series.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed CSV feed: {0}")]
    Csv(#[from] csv::Error),

    #[error("no observations for instrument '{instrument}'")]
    NoObservations { instrument: String },

    #[error("unparseable date '{value}' on line {line}")]
    UnparseableDate { line: usize, value: String },

    #[error("missing close price on {date}")]
    MissingClose { date: NaiveDate },

    #[error("duplicate observation for {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("series length mismatch: {dates} dates vs {values} values")]
    LengthMismatch { dates: usize, values: usize },

    #[error("series dates must be strictly increasing (violated at {date})")]
    Unordered { date: NaiveDate },
}
