//! Run differential calculations for a whole batch of adjustment records
//!
//! Reads one employee per CSV row and writes the full breakdown per row

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use salary_differential::batch::{load_records, AdjustmentRecord};
use salary_differential::{compute, DifferentialBreakdown, InvalidInput};

#[derive(Parser)]
#[command(
    name = "run_batch",
    about = "Compute differential breakdowns for a CSV of adjustment records"
)]
struct Args {
    /// Input CSV: employee_id,current_salary,proper_salary,start_date,end_date
    input: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "differential_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();
    println!("Loading adjustment records from {}...", args.input.display());

    let records = load_records(&args.input)?;
    println!("Loaded {} records in {:?}", records.len(), start.elapsed());

    println!("Running calculations...");
    let calc_start = Instant::now();
    let results: Vec<(String, Result<DifferentialBreakdown, InvalidInput>)> = records
        .par_iter()
        .map(|record| (record.employee_id.clone(), compute_record(record)))
        .collect();
    println!("Calculations complete in {:?}", calc_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(
        file,
        "EmployeeId,CurrentSalary,ProperSalary,BaseDifferential,GrossDifferential,SdBonus,GrossWithBonus,ContributionShare,TaxableAmount,WithholdingTax,TotalDeduction,NetAmount"
    )?;

    let mut computed = 0usize;
    let mut skipped = 0usize;
    let mut total_net = 0.0f64;

    for (employee_id, outcome) in &results {
        match outcome {
            Ok(b) => {
                writeln!(
                    file,
                    "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
                    employee_id,
                    b.current_salary,
                    b.proper_salary,
                    b.base_differential,
                    b.gross_differential,
                    b.bonus_amount,
                    b.gross_with_bonus,
                    b.contribution_share,
                    b.taxable_amount,
                    b.withholding_tax,
                    b.total_deduction,
                    b.net_amount,
                )?;
                computed += 1;
                total_net += b.net_amount;
            }
            Err(err) => {
                log::warn!("skipping {employee_id}: {err}");
                skipped += 1;
            }
        }
    }

    println!("Output written to {}", args.output.display());
    println!("\nBatch Summary:");
    println!("  Computed: {computed}");
    println!("  Skipped:  {skipped}");
    println!("  Total net payout: {total_net:.2}");
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

fn compute_record(record: &AdjustmentRecord) -> Result<DifferentialBreakdown, InvalidInput> {
    compute(&record.to_input()?)
}
