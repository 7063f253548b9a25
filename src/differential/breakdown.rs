//! Calculation input and breakdown result types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated inputs for one differential calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly salary actually received before the adjustment.
    pub current_salary: f64,
    /// Corrected monthly salary the employee should have received.
    pub proper_salary: f64,
    /// First day of the effective range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the effective range (inclusive).
    pub end_date: NaiveDate,
}

/// Full breakdown of one differential payout.
///
/// Every field is derived in full on each call; there is no identity or
/// lifecycle beyond the call itself. The input salaries are echoed so a
/// results view can render its whole table from one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferentialBreakdown {
    pub current_salary: f64,
    pub proper_salary: f64,
    /// Monthly pay gap, floored at zero. A salary decrease yields zero,
    /// never a negative payout.
    pub base_differential: f64,
    /// Pro-rated differential over the effective range.
    pub gross_differential: f64,
    /// SD bonus for crossed annual cutoffs.
    pub bonus_amount: f64,
    pub gross_with_bonus: f64,
    /// Mandatory contribution share withheld from gross.
    pub contribution_share: f64,
    pub taxable_amount: f64,
    pub withholding_tax: f64,
    pub total_deduction: f64,
    /// Amount actually paid out.
    pub net_amount: f64,
}
