//! Salary differential engine - back pay owed after a salary adjustment
//! between two effective dates
//!
//! This library provides:
//! - Pro-rated gross differential across partial and full months
//! - SD bonus eligibility over fixed annual cutoffs
//! - Mandatory contribution and withholding-tax deductions
//! - Raw-string input normalization and batch adjustment records

pub mod batch;
pub mod calendar;
pub mod deductions;
pub mod differential;
pub mod error;
pub mod input;

// Re-export commonly used types
pub use differential::{compute, CalculationInput, DifferentialBreakdown};
pub use error::InvalidInput;
pub use input::RawCalculation;
