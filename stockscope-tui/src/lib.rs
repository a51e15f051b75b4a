//! StockScope TUI — click-to-switch analysis dashboard for one instrument.
//!
//! The figure is split into a main area on the left and a grid of view
//! thumbnails on the right. Clicking a thumbnail (or pressing its number)
//! retires everything drawn by the previous view and renders the new one:
//! - Raw prices
//! - Moving averages
//! - ACF / PACF correlograms
//! - AR(1) forecast
//! - ARIMA grid-search forecast

pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod input;
pub mod logging;
pub mod preview;
pub mod scene;
pub mod theme;
pub mod ui;
pub mod view;
pub mod views;

pub use app::App;
pub use config::{Config, ConfigError};
pub use dashboard::{Dashboard, ViewSettings};
pub use error::RenderError;
pub use scene::Scene;
pub use theme::Theme;
pub use view::{Location, ViewRegistry, ViewState};
