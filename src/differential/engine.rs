//! The compute pipeline: validation, pro-ration, bonus, deductions

use crate::deductions::apply_deductions;
use crate::error::InvalidInput;

use super::bonus::BonusEligibility;
use super::breakdown::{CalculationInput, DifferentialBreakdown};
use super::proration::prorate;

/// Compute the full differential breakdown for one input.
///
/// Validation runs before any arithmetic: a reversed date range fails with
/// [`InvalidInput::ReversedRange`] and no partial result is produced. A zero
/// or decreased salary is a valid input and yields an all-zero breakdown.
///
/// The computation is pure and idempotent; identical inputs produce
/// bit-identical output.
pub fn compute(input: &CalculationInput) -> Result<DifferentialBreakdown, InvalidInput> {
    if input.end_date < input.start_date {
        return Err(InvalidInput::ReversedRange {
            start: input.start_date,
            end: input.end_date,
        });
    }

    let base_differential = (input.proper_salary - input.current_salary).max(0.0);

    let proration = prorate(input.start_date, input.end_date, base_differential);
    let bonus_amount =
        BonusEligibility::evaluate(input.start_date, input.end_date).amount(base_differential);
    let gross_with_bonus = proration.gross + bonus_amount;

    let deductions = apply_deductions(gross_with_bonus, input.proper_salary);

    Ok(DifferentialBreakdown {
        current_salary: input.current_salary,
        proper_salary: input.proper_salary,
        base_differential,
        gross_differential: proration.gross,
        bonus_amount,
        gross_with_bonus,
        contribution_share: deductions.contribution_share,
        taxable_amount: deductions.taxable_amount,
        withholding_tax: deductions.withholding_tax,
        total_deduction: deductions.total_deduction,
        net_amount: deductions.net_amount,
    })
}
