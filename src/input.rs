//! Raw input normalization at the caller boundary
//!
//! Callers hand over salaries and dates as raw strings (form fields, CSV
//! cells, JSON bodies). Normalization is the one documented sanitization
//! step: salary strings keep only digits and the decimal point, dates parse
//! as ISO-8601.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::differential::CalculationInput;
use crate::error::InvalidInput;

/// One calculation request as raw caller-supplied strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCalculation {
    #[serde(default)]
    pub current_salary: String,
    #[serde(default)]
    pub proper_salary: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl RawCalculation {
    /// Normalize into a validated [`CalculationInput`].
    ///
    /// Salaries that are missing or unparseable become zero (a partially
    /// filled form is a zero differential, not an error); dates must parse.
    pub fn normalize(&self) -> Result<CalculationInput, InvalidInput> {
        Ok(CalculationInput {
            current_salary: parse_amount(&self.current_salary),
            proper_salary: parse_amount(&self.proper_salary),
            start_date: parse_date("start date", &self.start_date)?,
            end_date: parse_date("end date", &self.end_date)?,
        })
    }
}

/// Strip currency symbols and grouping from an amount string and parse it.
///
/// Keeps only ASCII digits and `.`; whatever still fails to parse (including
/// the empty string) is treated as zero.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Parse a trimmed ISO-8601 (`YYYY-MM-DD`) date string.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, InvalidInput> {
    raw.trim().parse().map_err(|_| InvalidInput::BadDate {
        field,
        value: raw.to_string(),
    })
}
