//! Calendar and business-day utilities
//!
//! Pure date math over `chrono::NaiveDate`: month boundaries, inclusive
//! weekday counts, and whole-month differences. Holidays are out of scope;
//! only Saturday and Sunday are excluded from business-day counts.

use chrono::{Datelike, NaiveDate, Weekday};

/// First calendar day of the month containing `d`.
pub fn first_day_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).expect("day 1 exists in every month")
}

/// Last calendar day of the month containing `d`.
pub fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("month start has a predecessor")
}

/// Whether `d` falls on a weekday (Monday through Friday).
pub fn is_business_day(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Inclusive count of business days in `[start, end]`.
///
/// Returns 0 when `start > end`.
pub fn business_day_count(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_business_day(*day))
        .count() as u32
}

/// Whole-month difference between two dates (`year_delta * 12 + month_delta`).
///
/// Not adjusted for day-of-month; negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}
