//! StockScope — terminal dashboard for one instrument's daily prices.
//!
//! Views (click a thumbnail or press its number):
//! 1. Raw — open/high/low/close lines
//! 2. MA — prices with N-day rolling means
//! 3. ACF/PACF — correlogram grid per price field
//! 4. AR — AR(1) forecast of the close
//! 5. ARIMA — best-AIC ARIMA forecast of the close

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use stockscope_core::data::read_csv;
use stockscope_core::TimeSeriesStore;
use stockscope_tui::{input, logging, ui, App, Config, Dashboard};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let config = Config::load().context("loading configuration")?;
    logging::init(&config.log_path())?;

    // Data errors are fatal before the terminal is touched.
    let rows = read_csv(&config.data_path)
        .with_context(|| format!("reading {}", config.data_path.display()))?;
    let store = TimeSeriesStore::load(rows, &config.instrument)
        .with_context(|| format!("loading {} from {}", config.instrument, config.data_path.display()))?;

    let dashboard = Dashboard::new(store, config.view_settings(), &config.views);
    let mut app = App::new(dashboard);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    for line in app.dashboard.transcript() {
        println!("{line}");
    }
    tracing::info!("exiting");

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let figure = ui::figure_area(Rect::new(0, 0, size.width, size.height));
                    input::handle_mouse(app, mouse, figure);
                }
                _ => {}
            }
        }
    }
    Ok(())
}
