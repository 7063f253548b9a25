//! Differential calculation pipeline
//!
//! Composes pro-ration and bonus eligibility over the effective date range,
//! then hands the gross amount to the deduction layer.

mod bonus;
mod breakdown;
mod engine;
mod proration;

pub use bonus::BonusEligibility;
pub use breakdown::{CalculationInput, DifferentialBreakdown};
pub use engine::compute;
pub use proration::{prorate, Proration};

// ============================================================================
// Pro-Ration Constants
// ============================================================================
// The monthly differential converts to a per-day rate over an assumed working
// month. The divisor is fixed policy, not derived from the actual calendar.

/// Assumed working days per month for the daily pro-ration rate.
pub const WORKING_DAYS_PER_MONTH: f64 = 22.0;
