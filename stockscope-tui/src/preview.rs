//! Thumbnails for the right-hand grid, built once at startup.

use stockscope_core::indicators::{correlogram, CorrelogramKind};
use stockscope_core::{PriceField, TimeSeriesStore};

use crate::dashboard::ViewSettings;
use crate::scene::{date_x, Plot, Series, XAxis};
use crate::theme::Theme;
use crate::view::{ViewRegistry, ViewState};
use crate::views::{correlogram_plot, push_smoothed, zip_points};

/// Lags shown in the correlogram thumbnail.
pub const PREVIEW_ACF_LAGS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewBody {
    Plot(Plot),
    Caption(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub view: ViewState,
    pub body: PreviewBody,
}

impl Preview {
    pub fn build(
        view: ViewState,
        store: &TimeSeriesStore,
        settings: &ViewSettings,
        theme: &Theme,
    ) -> Self {
        let tail = store.tail(settings.preview_tail);
        let xs: Vec<f64> = tail.iter().map(|o| date_x(o.date)).collect();
        let column = |field: PriceField| tail.iter().map(|o| o.field(field)).collect::<Vec<_>>();

        let body = match view {
            ViewState::Raw => {
                let mut plot = Plot::new(view.label(), XAxis::Date);
                for field in PriceField::ALL {
                    plot.push(Series::line(
                        field.label(),
                        zip_points(&xs, &column(field)),
                        theme.field_color(field),
                    ));
                }
                PreviewBody::Plot(plot)
            }
            ViewState::MovingAverage => {
                let mut plot = Plot::new(view.label(), XAxis::Date);
                push_smoothed(&mut plot, theme, &xs, column, settings.moving_average_window);
                PreviewBody::Plot(plot)
            }
            ViewState::Autocorrelation => {
                let open = store.column(PriceField::Open);
                match correlogram(&open, PREVIEW_ACF_LAGS, CorrelogramKind::Acf) {
                    Some(gram) => PreviewBody::Plot(correlogram_plot(
                        view.label().to_string(),
                        &gram,
                        theme,
                        theme.open,
                    )),
                    None => PreviewBody::Caption("ACF/PACF"),
                }
            }
            ViewState::Autoregressive => PreviewBody::Caption("AR Model"),
            ViewState::Arima => PreviewBody::Caption("ARIMA Model"),
        };
        Self { view, body }
    }
}

/// One preview per registered view, in registry order.
pub fn build_all(
    registry: &ViewRegistry,
    store: &TimeSeriesStore,
    settings: &ViewSettings,
    theme: &Theme,
) -> Vec<Preview> {
    registry
        .entries()
        .iter()
        .map(|entry| Preview::build(entry.view, store, settings, theme))
        .collect()
}
