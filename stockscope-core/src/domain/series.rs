//! Business-day regularised price series.

use chrono::NaiveDate;

use crate::data::DataError;

/// A date → price mapping on a fixed step (one entry per business day).
///
/// Built by [`TimeSeriesStore::closing_series`](crate::TimeSeriesStore::closing_series)
/// with gaps forward-filled. Both forecasters assume the step is regular.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegularizedSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl RegularizedSeries {
    /// Build a series from parallel date/value vectors.
    ///
    /// Dates must be strictly increasing and the vectors the same length.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self, DataError> {
        if dates.len() != values.len() {
            return Err(DataError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        if let Some(pair) = dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(DataError::Unordered { date: pair[1] });
        }
        Ok(Self { dates, values })
    }

    /// Trusted constructor for calendars the store has already generated.
    pub(crate) fn from_calendar(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = RegularizedSeries::new(vec![d("2024-01-02")], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DataError::LengthMismatch { dates: 1, values: 2 }));
    }

    #[test]
    fn rejects_unordered_dates() {
        let err = RegularizedSeries::new(
            vec![d("2024-01-03"), d("2024-01-02")],
            vec![1.0, 2.0],
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Unordered { .. }));
    }

    #[test]
    fn accessors_expose_calendar_ends() {
        let series = RegularizedSeries::new(
            vec![d("2024-01-02"), d("2024-01-03"), d("2024-01-04")],
            vec![10.0, 11.0, 12.0],
        )
        .unwrap();
        assert_eq!(series.last_date(), Some(d("2024-01-04")));
        assert_eq!(series.len(), 3);
    }
}
