//! Compute one salary differential breakdown from the command line
//!
//! Prints the same rows the results view renders, or raw JSON with --json

use anyhow::Context;
use clap::Parser;
use salary_differential::{compute, DifferentialBreakdown, RawCalculation};

#[derive(Parser)]
#[command(name = "compute", about = "Compute a salary differential breakdown")]
struct Args {
    /// Monthly salary before the adjustment (currency symbols allowed)
    #[arg(long)]
    current_salary: String,

    /// Corrected monthly salary
    #[arg(long)]
    proper_salary: String,

    /// First day of the effective range (YYYY-MM-DD)
    #[arg(long)]
    start_date: String,

    /// Last day of the effective range (YYYY-MM-DD)
    #[arg(long)]
    end_date: String,

    /// Emit the breakdown as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input = RawCalculation {
        current_salary: args.current_salary,
        proper_salary: args.proper_salary,
        start_date: args.start_date,
        end_date: args.end_date,
    }
    .normalize()?;

    let breakdown = compute(&input)?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&breakdown).context("serializing breakdown")?;
        println!("{rendered}");
    } else {
        print_table(&breakdown);
    }
    Ok(())
}

fn print_table(b: &DifferentialBreakdown) {
    let rows = [
        ("Current Salary", b.current_salary),
        ("Actual Salary", b.proper_salary),
        ("Difference", b.base_differential),
        ("Gross Differential", b.gross_differential),
        ("SD Bonus", b.bonus_amount),
        ("Gross + SD Bonus", b.gross_with_bonus),
        ("Contribution Share", b.contribution_share),
        ("Taxable Amount", b.taxable_amount),
        ("Withholding Tax", b.withholding_tax),
        ("Total Deduction", b.total_deduction),
        ("Net", b.net_amount),
    ];
    for (label, value) in rows {
        println!("{:<20} {:>18}", label, format_amount(value));
    }
}

/// Fixed two-decimal formatting with thousands grouping.
fn format_amount(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::new();
    let count = digits.chars().count();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}
