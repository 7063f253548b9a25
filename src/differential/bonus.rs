//! SD bonus eligibility over fixed annual cutoffs

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Month and day of the mid-year bonus cutoff (May 15).
const MID_YEAR_CUTOFF: (u32, u32) = (5, 15);

/// Month and day of the year-end bonus cutoff (October 31).
const YEAR_END_CUTOFF: (u32, u32) = (10, 31);

/// Which annual bonus cutoffs an effective range crosses.
///
/// Cutoffs are anchored to the start date's year. Each crossed cutoff pays
/// one full base-differential unit, and both may apply when the range spans
/// most of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BonusEligibility {
    pub mid_year: bool,
    pub year_end: bool,
}

impl BonusEligibility {
    /// Evaluate both cutoffs against the inclusive `[start, end]` range.
    pub fn evaluate(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            mid_year: crosses(start, end, MID_YEAR_CUTOFF),
            year_end: crosses(start, end, YEAR_END_CUTOFF),
        }
    }

    /// Number of crossed cutoffs (0, 1, or 2).
    pub fn units(&self) -> u32 {
        u32::from(self.mid_year) + u32::from(self.year_end)
    }

    /// Bonus payout for the given base differential.
    pub fn amount(&self, base_differential: f64) -> f64 {
        base_differential * f64::from(self.units())
    }
}

fn crosses(start: NaiveDate, end: NaiveDate, (month, day): (u32, u32)) -> bool {
    NaiveDate::from_ymd_opt(start.year(), month, day)
        .map(|cutoff| start <= cutoff && cutoff <= end)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_may_range_crosses_mid_year_only() {
        let b = BonusEligibility::evaluate(date(2024, 5, 1), date(2024, 5, 31));
        assert!(b.mid_year);
        assert!(!b.year_end);
        assert_eq!(b.units(), 1);
        assert_eq!(b.amount(5000.0), 5000.0);
    }

    #[test]
    fn test_full_year_crosses_both() {
        let b = BonusEligibility::evaluate(date(2024, 1, 1), date(2024, 12, 31));
        assert!(b.mid_year);
        assert!(b.year_end);
        assert_eq!(b.units(), 2);
        assert_eq!(b.amount(5000.0), 10000.0);
    }

    #[test]
    fn test_range_between_cutoffs() {
        let b = BonusEligibility::evaluate(date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(b.units(), 0);
        assert_eq!(b.amount(5000.0), 0.0);
    }

    #[test]
    fn test_cutoff_on_boundary_counts() {
        // A one-day range sitting exactly on the cutoff still crosses it
        let b = BonusEligibility::evaluate(date(2024, 5, 15), date(2024, 5, 15));
        assert!(b.mid_year);

        let b = BonusEligibility::evaluate(date(2024, 10, 31), date(2024, 11, 30));
        assert!(b.year_end);
    }

    #[test]
    fn test_cutoffs_anchor_to_start_year() {
        // Dec 2024 .. Jun 2025: the 2024 cutoffs are behind the start date,
        // and the 2025 cutoffs are never consulted
        let b = BonusEligibility::evaluate(date(2024, 12, 1), date(2025, 6, 30));
        assert_eq!(b.units(), 0);
    }
}
