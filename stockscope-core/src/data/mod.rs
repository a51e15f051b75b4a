//! Data ingestion, the observation store and the business-day calendar

pub mod calendar;
pub mod error;
pub mod ingest;
pub mod store;

pub use error::DataError;
pub use ingest::{read_csv, read_csv_from, RawRow};
pub use store::TimeSeriesStore;
