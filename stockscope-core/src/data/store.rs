//! TimeSeriesStore — the cleaned, date-sorted series of one instrument.
//!
//! The store is immutable once loaded. Forecasters ask it for a fresh
//! business-day regularised closing series on every request; nothing derived
//! is cached.

use chrono::NaiveDate;

use super::calendar::business_days_between;
use super::ingest::{parse_date, RawRow};
use super::DataError;
use crate::domain::{Observation, PriceField, RegularizedSeries, Symbol};

#[derive(Debug, Clone)]
pub struct TimeSeriesStore {
    symbol: Symbol,
    observations: Vec<Observation>,
}

impl TimeSeriesStore {
    /// Filter raw rows to `instrument`, parse their dates and sort ascending.
    ///
    /// Rows for other instruments are skipped before any parsing, so a bad
    /// date elsewhere in the feed does not block this instrument.
    pub fn load<I>(rows: I, instrument: &str) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut observations = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            if row.name != instrument {
                continue;
            }
            // Line 1 is the header.
            let line = index + 2;
            let date = parse_date(&row.date).ok_or_else(|| DataError::UnparseableDate {
                line,
                value: row.date.clone(),
            })?;
            let close = row
                .close
                .filter(|c| c.is_finite())
                .ok_or(DataError::MissingClose { date })?;
            observations.push(Observation {
                date,
                open: row.open.unwrap_or(f64::NAN),
                high: row.high.unwrap_or(f64::NAN),
                low: row.low.unwrap_or(f64::NAN),
                close,
            });
        }
        Self::from_observations(instrument, observations)
    }

    /// Build a store from already-parsed observations (any order).
    pub fn from_observations(
        symbol: impl Into<Symbol>,
        mut observations: Vec<Observation>,
    ) -> Result<Self, DataError> {
        let symbol = symbol.into();
        if observations.is_empty() {
            return Err(DataError::NoObservations { instrument: symbol });
        }

        observations.sort_by_key(|o| o.date);
        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(DataError::DuplicateDate { date: pair[1].date });
        }

        tracing::info!(
            instrument = %symbol,
            observations = observations.len(),
            first = %observations[0].date,
            last = %observations[observations.len() - 1].date,
            "loaded observation series"
        );

        Ok(Self {
            symbol,
            observations,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// One price column, in date order. Blank feed values come back as NaN.
    pub fn column(&self, field: PriceField) -> Vec<f64> {
        self.observations.iter().map(|o| o.field(field)).collect()
    }

    /// The most recent `n` observations (all of them if fewer exist).
    pub fn tail(&self, n: usize) -> &[Observation] {
        let start = self.observations.len().saturating_sub(n);
        &self.observations[start..]
    }

    /// Closing prices reindexed onto the business-day calendar.
    ///
    /// Every Monday–Friday in `[first, last]` gets the most recent close at or
    /// before that day, so holidays carry the previous session's close.
    pub fn closing_series(&self) -> RegularizedSeries {
        let (Some(first), Some(last)) = (self.first_date(), self.last_date()) else {
            return RegularizedSeries::default();
        };

        let mut dates = Vec::new();
        let mut values = Vec::new();
        let mut cursor = 0;
        for day in business_days_between(first, last) {
            while cursor + 1 < self.observations.len() && self.observations[cursor + 1].date <= day
            {
                cursor += 1;
            }
            dates.push(day);
            values.push(self.observations[cursor].close);
        }

        tracing::debug!(
            instrument = %self.symbol,
            observed = self.observations.len(),
            regularized = dates.len(),
            "built business-day closing series"
        );

        RegularizedSeries::from_calendar(dates, values)
    }
}
