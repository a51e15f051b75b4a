//! Monday–Friday business-day calendar.
//!
//! Weekends are the only non-business days. Exchange holidays are not
//! modelled: a forecast dated on a holiday is a known simplification.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Business days strictly after `date`, ascending.
pub fn business_days_after(date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(date.succ_opt(), |d| d.succ_opt()).filter(|d| is_business_day(*d))
}

/// Business days in `[start, end]`, ascending.
pub fn business_days_between(
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt())
        .take_while(move |d| *d <= end)
        .filter(|d| is_business_day(*d))
}

/// The next `count` business days after `date`.
pub fn next_business_days(date: NaiveDate, count: usize) -> Vec<NaiveDate> {
    business_days_after(date).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn weekends_are_not_business_days() {
        assert!(is_business_day(d("2018-02-02"))); // Friday
        assert!(!is_business_day(d("2018-02-03")));
        assert!(!is_business_day(d("2018-02-04")));
        assert!(is_business_day(d("2018-02-05")));
    }

    #[test]
    fn next_days_skip_the_weekend() {
        let days = next_business_days(d("2018-02-07"), 5); // Wednesday
        assert_eq!(
            days,
            vec![
                d("2018-02-08"),
                d("2018-02-09"),
                d("2018-02-12"),
                d("2018-02-13"),
                d("2018-02-14"),
            ]
        );
    }

    #[test]
    fn next_days_from_a_saturday_start_monday() {
        let days = next_business_days(d("2018-02-03"), 1);
        assert_eq!(days, vec![d("2018-02-05")]);
    }

    #[test]
    fn holidays_are_still_business_days() {
        // 2018-12-25 is a Tuesday and an exchange holiday.
        let days = next_business_days(d("2018-12-24"), 1);
        assert_eq!(days, vec![d("2018-12-25")]);
    }

    #[test]
    fn between_is_inclusive() {
        let days: Vec<_> = business_days_between(d("2018-02-02"), d("2018-02-05")).collect();
        assert_eq!(days, vec![d("2018-02-02"), d("2018-02-05")]);
    }
}
