//! Domain types for StockScope

pub mod observation;
pub mod series;

pub use observation::{Observation, PriceField};
pub use series::RegularizedSeries;

/// Instrument symbol type alias
pub type Symbol = String;
