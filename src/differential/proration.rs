//! Pro-rated gross differential across partial and full months

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{business_day_count, first_day_of_month, last_day_of_month, months_between};

use super::WORKING_DAYS_PER_MONTH;

/// How the effective range splits into pro-ration segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proration {
    /// Business days from the start date through the end of its month.
    /// For a range inside a single month this is the whole range.
    pub first_segment_days: u32,
    /// Business days from the start of the end date's month through the end
    /// date. Zero for a single-month range.
    pub last_segment_days: u32,
    /// Whole calendar months strictly between the two partial months.
    pub full_months: u32,
    /// Pro-rated differential owed over the range.
    pub gross: f64,
}

/// Pro-rate `base_differential` over the inclusive `[start, end]` range.
///
/// Partial boundary months earn the daily rate (`base_differential / 22`)
/// per business day; every whole month in between earns the full monthly
/// differential.
pub fn prorate(start: NaiveDate, end: NaiveDate, base_differential: f64) -> Proration {
    let daily_rate = base_differential / WORKING_DAYS_PER_MONTH;

    if start.year() == end.year() && start.month() == end.month() {
        let days = business_day_count(start, end);
        return Proration {
            first_segment_days: days,
            last_segment_days: 0,
            full_months: 0,
            gross: daily_rate * f64::from(days),
        };
    }

    let first_segment_days = business_day_count(start, last_day_of_month(start));
    let last_segment_days = business_day_count(first_day_of_month(end), end);
    // Subtract the two partial boundary months; clamp at zero for a range
    // that crosses a month boundary without containing a whole month.
    let full_months = (months_between(start, end) - 1).max(0) as u32;

    let gross = daily_rate * f64::from(first_segment_days + last_segment_days)
        + base_differential * f64::from(full_months);

    Proration {
        first_segment_days,
        last_segment_days,
        full_months,
        gross,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_month_range() {
        // Mon 2024-06-03 .. Fri 2024-06-14, 10 business days
        let p = prorate(date(2024, 6, 3), date(2024, 6, 14), 5000.0);

        assert_eq!(p.first_segment_days, 10);
        assert_eq!(p.last_segment_days, 0);
        assert_eq!(p.full_months, 0);
        assert_relative_eq!(p.gross, 5000.0 / 22.0 * 10.0);
        assert!((p.gross - 2272.73).abs() < 0.01);
    }

    #[test]
    fn test_cross_month_with_one_full_month() {
        // Thu 2024-02-01 .. Mon 2024-04-01: February and April are partial,
        // March is the one whole month in between
        let p = prorate(date(2024, 2, 1), date(2024, 4, 1), 5000.0);

        assert_eq!(p.first_segment_days, 21); // all of leap-year February
        assert_eq!(p.last_segment_days, 1); // April 1 only
        assert_eq!(p.full_months, 1);
        let expected = 5000.0 / 22.0 * 22.0 + 5000.0;
        assert_relative_eq!(p.gross, expected);
    }

    #[test]
    fn test_adjacent_months_clamp_to_zero_full_months() {
        let p = prorate(date(2024, 1, 25), date(2024, 2, 5), 5000.0);

        assert_eq!(p.full_months, 0);
        // Thu Jan 25 .. Wed Jan 31 = 5 weekdays; Thu Feb 1 .. Mon Feb 5 = 3
        assert_eq!(p.first_segment_days, 5);
        assert_eq!(p.last_segment_days, 3);
        assert_relative_eq!(p.gross, 5000.0 / 22.0 * 8.0);
    }

    #[test]
    fn test_year_boundary() {
        // Dec 2023 into Jan 2024 crosses a year without a whole month between
        let p = prorate(date(2023, 12, 15), date(2024, 1, 10), 1000.0);

        assert_eq!(p.full_months, 0);
        // Fri Dec 15 .. Fri Dec 29 has 11 weekdays, Sat 30 / Sun 31 excluded
        assert_eq!(p.first_segment_days, 11);
        // Mon Jan 1 .. Wed Jan 10 has 8 weekdays
        assert_eq!(p.last_segment_days, 8);
    }

    #[test]
    fn test_zero_differential() {
        let p = prorate(date(2024, 2, 1), date(2024, 4, 1), 0.0);
        assert_eq!(p.gross, 0.0);
    }
}
