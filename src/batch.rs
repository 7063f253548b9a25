//! Batch adjustment records loaded from CSV
//!
//! One record per employee. Salary and date cells stay raw strings so every
//! caller path goes through the same normalization step as the single-shot
//! surfaces.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::differential::CalculationInput;
use crate::error::InvalidInput;
use crate::input::RawCalculation;

/// One salary adjustment row from a batch CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentRecord {
    pub employee_id: String,
    pub current_salary: String,
    pub proper_salary: String,
    pub start_date: String,
    pub end_date: String,
}

impl AdjustmentRecord {
    /// Normalize this record's raw cells into engine input.
    pub fn to_input(&self) -> Result<CalculationInput, InvalidInput> {
        RawCalculation {
            current_salary: self.current_salary.clone(),
            proper_salary: self.proper_salary.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
        .normalize()
    }
}

/// Load adjustment records from any CSV reader.
pub fn load_records_from_reader<R: Read>(reader: R) -> anyhow::Result<Vec<AdjustmentRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: AdjustmentRecord = row.context("malformed adjustment record")?;
        records.push(record);
    }
    Ok(records)
}

/// Load adjustment records from a CSV file on disk.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<AdjustmentRecord>> {
    let file =
        File::open(path).with_context(|| format!("opening records file {}", path.display()))?;
    let records = load_records_from_reader(file)?;
    log::info!(
        "loaded {} adjustment records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
