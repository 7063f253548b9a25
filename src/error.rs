//! Engine error taxonomy

use chrono::NaiveDate;
use thiserror::Error;

/// Inputs that cannot form a valid calculation.
///
/// This is the only engine-level error kind. Both variants are detected
/// before any arithmetic runs, so a failed call never produces a partial
/// breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A date string did not parse as a calendar date.
    #[error("{field} is not a valid calendar date (expected YYYY-MM-DD): {value:?}")]
    BadDate { field: &'static str, value: String },

    /// The effective range is reversed.
    #[error("end date {end} is earlier than start date {start}")]
    ReversedRange { start: NaiveDate, end: NaiveDate },
}
