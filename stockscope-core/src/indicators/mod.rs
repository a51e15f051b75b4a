//! Indicators computed over raw price columns.

pub mod autocorrelation;
pub mod sma;

pub use autocorrelation::{acf, correlogram, pacf, Correlogram, CorrelogramKind};
pub use sma::Sma;
