use std::path::Path;

use anyhow::{Context, Result};

use crate::models::error::ExpandError;
use crate::models::table::Table;

/// Read the whole CSV file into a [`Table`], sets the capacity 32k for the
/// buffer used in the CSV reader.
///
/// The header is kept as row 0 of the table rather than handled by the csv
/// crate, and records are read strictly so a ragged row fails the run. Cell
/// values are not trimmed.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .buffer_capacity(32 * 1024)
        .from_path(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;

    let mut records = reader.records();

    let header = records
        .next()
        .ok_or(ExpandError::EmptyInput)?
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in records {
        let record =
            record.with_context(|| format!("failed to read data row of {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { header, rows })
}
