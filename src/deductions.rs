//! Deduction and net payout computation
//!
//! Applies the mandatory contribution share and the withholding-tax bracket
//! lookup to a gross payout. The tax table is the current one only; there is
//! no historical versioning.

use serde::Serialize;

/// Mandatory contribution rate withheld from gross (9%).
pub const CONTRIBUTION_RATE: f64 = 0.09;

/// Annualized salary at or below which no withholding tax applies.
pub const TAX_EXEMPT_CEILING: f64 = 250_000.0;

/// Withholding tax rate for an annualized salary.
///
/// Flat bracket lookup: the matched bracket's single rate applies to the
/// entire taxable amount, not cumulatively per slice.
pub fn withholding_rate(annual_salary: f64) -> f64 {
    if annual_salary <= TAX_EXEMPT_CEILING {
        0.0
    } else if annual_salary < 400_000.0 {
        0.15
    } else if annual_salary <= 800_000.0 {
        0.20
    } else if annual_salary <= 2_000_000.0 {
        0.25
    } else if annual_salary <= 8_000_000.0 {
        0.30
    } else {
        0.32
    }
}

/// Deduction lines derived from a gross payout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deductions {
    pub contribution_share: f64,
    pub taxable_amount: f64,
    pub withholding_tax: f64,
    pub total_deduction: f64,
    pub net_amount: f64,
}

/// Apply the contribution share and bracket tax to a gross amount.
///
/// The bracket is looked up on the annualized proper salary
/// (`proper_salary * 12`), not on the payout itself.
pub fn apply_deductions(gross_with_bonus: f64, proper_salary: f64) -> Deductions {
    let contribution_share = gross_with_bonus * CONTRIBUTION_RATE;
    let taxable_amount = gross_with_bonus - contribution_share;

    let rate = withholding_rate(proper_salary * 12.0);
    let withholding_tax = taxable_amount * rate;
    let total_deduction = contribution_share + withholding_tax;

    Deductions {
        contribution_share,
        taxable_amount,
        withholding_tax,
        total_deduction,
        net_amount: gross_with_bonus - total_deduction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_edges() {
        assert_eq!(withholding_rate(0.0), 0.0);
        assert_eq!(withholding_rate(250_000.0), 0.0);
        assert_eq!(withholding_rate(250_001.0), 0.15);
        assert_eq!(withholding_rate(399_999.0), 0.15);
        assert_eq!(withholding_rate(400_000.0), 0.20);
        assert_eq!(withholding_rate(800_000.0), 0.20);
        assert_eq!(withholding_rate(800_001.0), 0.25);
        assert_eq!(withholding_rate(2_000_000.0), 0.25);
        assert_eq!(withholding_rate(2_000_001.0), 0.30);
        assert_eq!(withholding_rate(8_000_000.0), 0.30);
        assert_eq!(withholding_rate(8_000_001.0), 0.32);
    }

    #[test]
    fn test_apply_deductions_mid_bracket() {
        // Proper salary 25,000/month annualizes to 300,000: the 15% bracket
        let d = apply_deductions(10_000.0, 25_000.0);

        assert!((d.contribution_share - 900.0).abs() < 1e-9);
        assert!((d.taxable_amount - 9_100.0).abs() < 1e-9);
        assert!((d.withholding_tax - 1_365.0).abs() < 1e-9);
        assert!((d.total_deduction - 2_265.0).abs() < 1e-9);
        assert!((d.net_amount - 7_735.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_deductions_exempt() {
        // 20,000/month annualizes to 240,000: exempt
        let d = apply_deductions(10_000.0, 20_000.0);

        assert_eq!(d.withholding_tax, 0.0);
        assert!((d.net_amount - (10_000.0 - d.contribution_share)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_gross() {
        let d = apply_deductions(0.0, 25_000.0);

        assert_eq!(d.contribution_share, 0.0);
        assert_eq!(d.withholding_tax, 0.0);
        assert_eq!(d.net_amount, 0.0);
    }

    #[test]
    fn test_net_identity() {
        let d = apply_deductions(12_345.67, 70_000.0);
        assert_eq!(d.net_amount, 12_345.67 - d.total_deduction);
        assert_eq!(d.total_deduction, d.contribution_share + d.withholding_tax);
    }
}
