//! Render functions, one per view, each drawing into a freshly cleared scene.

use stockscope_core::indicators::{correlogram, Correlogram, CorrelogramKind, Sma};
use stockscope_core::{
    ArimaGridSearchForecaster, AutoregressiveForecaster, ForecastResult, PriceField,
    RegularizedSeries, TimeSeriesStore, FORECAST_HORIZON,
};

use crate::dashboard::ViewSettings;
use crate::error::RenderError;
use crate::scene::{date_x, Annotation, Plot, PointMarker, Scene, Series, SeriesKind, Stroke, XAxis};
use crate::theme::Theme;
use crate::view::ViewState;

/// Observations the correlogram grid needs before PACF has a single lag.
const MIN_CORRELOGRAM_OBSERVATIONS: usize = 4;

/// Everything a render function may read.
pub struct RenderContext<'a> {
    pub store: &'a TimeSeriesStore,
    pub settings: &'a ViewSettings,
    pub theme: &'a Theme,
    pub autoregressive: &'a AutoregressiveForecaster,
    pub arima: &'a ArimaGridSearchForecaster,
}

pub type RenderFn = fn(&RenderContext<'_>, &mut Scene) -> Result<(), RenderError>;

/// The render function bound to `view`.
pub fn render_fn(view: ViewState) -> RenderFn {
    match view {
        ViewState::Raw => render_raw,
        ViewState::MovingAverage => render_moving_average,
        ViewState::Autocorrelation => render_autocorrelation,
        ViewState::Autoregressive => render_autoregressive,
        ViewState::Arima => render_arima,
    }
}

/// Pair x coordinates with values. NaN values are kept and skipped when painted.
pub(crate) fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

fn render_raw(ctx: &RenderContext<'_>, scene: &mut Scene) -> Result<(), RenderError> {
    let store = ctx.store;
    let xs: Vec<f64> = store.dates().into_iter().map(date_x).collect();

    let mut plot = Plot::new(format!("{} Stock Prices - Raw Data", store.symbol()), XAxis::Date)
        .labels("Date", "Price (USD)")
        .with_legend();
    for field in PriceField::ALL {
        plot.push(Series::line(
            field.label(),
            zip_points(&xs, &store.column(field)),
            ctx.theme.field_color(field),
        ));
    }
    scene.push_plot(plot);
    Ok(())
}

fn render_moving_average(ctx: &RenderContext<'_>, scene: &mut Scene) -> Result<(), RenderError> {
    let store = ctx.store;
    let window = ctx.settings.moving_average_window;
    let xs: Vec<f64> = store.dates().into_iter().map(date_x).collect();

    let mut plot = Plot::new(
        format!("{} Stock Prices with {window}-Day Moving Averages", store.symbol()),
        XAxis::Date,
    )
    .labels("Date", "Price (USD)")
    .with_legend();
    push_smoothed(&mut plot, ctx.theme, &xs, |field| store.column(field), window);
    scene.push_plot(plot);
    Ok(())
}

/// Faded raw lines followed by dashed rolling means, one pair per field.
pub(crate) fn push_smoothed(
    plot: &mut Plot,
    theme: &Theme,
    xs: &[f64],
    column: impl Fn(PriceField) -> Vec<f64>,
    window: usize,
) {
    let sma = Sma::new(window);
    let columns: Vec<(PriceField, Vec<f64>)> =
        PriceField::ALL.iter().map(|f| (*f, column(*f))).collect();
    for (field, values) in &columns {
        plot.push(
            Series::line(field.label(), zip_points(xs, values), theme.field_color(*field))
                .stroke(Stroke::Faded),
        );
    }
    for (field, values) in &columns {
        plot.push(
            Series::line(
                format!("{} {window}d MA", field.label()),
                zip_points(xs, &sma.compute(values)),
                theme.field_color(*field),
            )
            .stroke(Stroke::Dashed),
        );
    }
}

fn render_autocorrelation(ctx: &RenderContext<'_>, scene: &mut Scene) -> Result<(), RenderError> {
    let store = ctx.store;
    if store.len() < MIN_CORRELOGRAM_OBSERVATIONS {
        return Err(RenderError::TooFewObservations {
            view: ViewState::Autocorrelation,
            needed: MIN_CORRELOGRAM_OBSERVATIONS,
            got: store.len(),
        });
    }

    for (row, field) in PriceField::ALL.iter().enumerate() {
        let values = store.column(*field);
        for (col, kind) in [CorrelogramKind::Acf, CorrelogramKind::Pacf].into_iter().enumerate() {
            let gram = correlogram(&values, ctx.settings.acf_lags, kind).ok_or(
                RenderError::NoCorrelogram {
                    field: field.label(),
                    kind: kind.label(),
                },
            )?;
            let plot = correlogram_plot(
                format!("{} {}", field.label(), kind.label()),
                &gram,
                ctx.theme,
                ctx.theme.field_color(*field),
            )
            .at(row, col);
            scene.push_plot(plot);
        }
    }
    Ok(())
}

/// Stems per lag inside a ±band envelope.
pub(crate) fn correlogram_plot(
    title: String,
    gram: &Correlogram,
    theme: &Theme,
    color: ratatui::style::Color,
) -> Plot {
    let lags: Vec<f64> = gram.lags.iter().map(|&l| l as f64).collect();
    let lower: Vec<f64> = gram.band.iter().map(|b| -b).collect();

    let mut plot = Plot::new(title, XAxis::Lag);
    plot.push(
        Series::line("upper", zip_points(&lags, &gram.band), theme.band)
            .kind(SeriesKind::Band)
            .stroke(Stroke::Faded),
    );
    plot.push(
        Series::line("lower", zip_points(&lags, &lower), theme.band)
            .kind(SeriesKind::Band)
            .stroke(Stroke::Faded),
    );
    plot.push(
        Series::line(gram.kind.label(), zip_points(&lags, &gram.values), color)
            .kind(SeriesKind::Stem),
    );
    plot
}

fn render_autoregressive(ctx: &RenderContext<'_>, scene: &mut Scene) -> Result<(), RenderError> {
    let series = ctx.store.closing_series();
    let fitted = ctx.autoregressive.fit(&series)?;
    let result = ctx.autoregressive.forecast(&fitted, FORECAST_HORIZON);

    let title = format!("AR(1) Model Forecast for {} Close Price", ctx.store.symbol());
    draw_forecast(scene, ctx.theme, title, &series, &result);
    Ok(())
}

fn render_arima(ctx: &RenderContext<'_>, scene: &mut Scene) -> Result<(), RenderError> {
    let series = ctx.store.closing_series();
    let result = ctx.arima.select_and_forecast(&series, FORECAST_HORIZON)?;

    let order = result
        .chosen_order
        .map(|o| o.to_string())
        .unwrap_or_default();
    let title = format!("ARIMA{order} Model Forecast for {} Close Price", ctx.store.symbol());
    draw_forecast(scene, ctx.theme, title, &series, &result);
    Ok(())
}

/// History, dashed forecast with markers, diagnostic box and console lines.
fn draw_forecast(
    scene: &mut Scene,
    theme: &Theme,
    title: String,
    history: &RegularizedSeries,
    result: &ForecastResult,
) {
    let history_points: Vec<(f64, f64)> = history.iter().map(|(d, v)| (date_x(d), v)).collect();
    let forecast_points: Vec<(f64, f64)> =
        result.points.iter().map(|(d, v)| (date_x(*d), *v)).collect();

    let mut plot = Plot::new(title, XAxis::Date)
        .labels("Date", "Price (USD)")
        .with_legend();
    plot.push(Series::line("Close Price", history_points, theme.close));
    plot.push(
        Series::line("Forecast", forecast_points, theme.forecast)
            .stroke(Stroke::Dashed)
            .marker(PointMarker::Circle),
    );
    plot.annotation = Some(Annotation {
        text: result.diagnostic.clone(),
        x: 0.05,
        y: 0.05,
    });
    scene.push_plot(plot);

    scene.print("Forecasted prices:");
    for line in result.console_lines() {
        scene.print(line);
    }
}
