//! Colour tokens for the dashboard.
//!
//! Price fields keep fixed colours across every view so a line can be
//! recognised between the thumbnail and the main plot:
//! - **Open**: blue
//! - **High**: green
//! - **Low**: red
//! - **Close**: purple
//! - **Forecast**: orange

use ratatui::style::{Color, Modifier, Style};

use stockscope_core::PriceField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Deep charcoal (primary surface)
    pub background: Color,
    /// Electric cyan (focus, titles)
    pub accent: Color,
    /// Neon orange (warnings, forecast)
    pub warning: Color,
    /// Hot pink (errors)
    pub negative: Color,
    /// Steel blue (axes, hints)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub open: Color,
    pub high: Color,
    pub low: Color,
    pub close: Color,
    pub forecast: Color,
    /// Confidence band around a correlogram.
    pub band: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal_dark()
    }
}

impl Theme {
    pub fn terminal_dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            warning: Color::Rgb(255, 140, 0),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),

            open: Color::Rgb(64, 128, 255),
            high: Color::Rgb(0, 200, 90),
            low: Color::Rgb(230, 60, 60),
            close: Color::Rgb(170, 90, 220),
            forecast: Color::Rgb(255, 165, 0),
            band: Color::Rgb(90, 110, 160),
        }
    }

    pub fn field_color(&self, field: PriceField) -> Color {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
        }
    }

    /// Half-way blend of `color` into the background.
    pub fn faded(&self, color: Color) -> Color {
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                ((r as u16 + br as u16) / 2) as u8,
                ((g as u16 + bg as u16) / 2) as u8,
                ((b as u16 + bb as u16) / 2) as u8,
            ),
            (other, _) => other,
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }
}
