use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::error::ExpandError;
use crate::models::table::Table;

/// Derive the output path for an input CSV: `<stem>_cleaned.csv` beside it.
///
/// The input must carry a `.csv` extension so the suffix swap is well
/// defined.
pub fn derive_output_path(input: &Path) -> Result<PathBuf, ExpandError> {
    let stem = match (input.extension().and_then(OsStr::to_str), input.file_stem()) {
        (Some("csv"), Some(stem)) => stem,
        _ => return Err(ExpandError::NonCsvPath(input.display().to_string())),
    };

    let mut name = stem.to_os_string();
    name.push("_cleaned.csv");
    Ok(input.with_file_name(name))
}

/// Write a [`Table`] as CSV, header row first, with minimal quoting.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut builder = csv::WriterBuilder::new().from_writer(writer);

    builder
        .write_record(&table.header)
        .context("failed to write header row")?;

    for row in &table.rows {
        builder.write_record(row).context("failed to write data row")?;
    }

    builder.flush().context("failed to flush output")?;

    Ok(())
}
