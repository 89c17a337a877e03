use std::path::PathBuf;

use clap::Parser;

use crate::models::error::ExpandError;

/// Expands one column of a CSV file into multiple columns.
///
/// Useful when a column holds `(x, y, z)` values stored as
/// `"(number, number, number)"` but each component is needed in its own
/// column.
#[derive(Parser, Debug)]
#[command(name = "csv_expand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file
    pub file: PathBuf,

    /// The column of the CSV to expand
    pub column_name: String,

    /// Comma-delimited names of the columns each value should be expanded
    /// into, e.g. "column1,column2,column3"
    pub expand_cols_into: String,

    /// String to prepend to each "expand_cols_into" column name
    #[arg(short = 'p', long = "prepend_to_expand_cols", default_value = "")]
    pub prepend_to_expand_cols: String,
}

/// Split the `expand_cols_into` argument into destination column names.
///
/// A single balanced pair of surrounding double quotes is stripped first;
/// a quote on only one side is a usage error. Empty names are allowed.
pub fn parse_dest_names(raw: &str) -> Result<Vec<String>, ExpandError> {
    let names = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else if raw.starts_with('"') || raw.ends_with('"') {
        return Err(ExpandError::UnbalancedQuotes(raw.to_string()));
    } else {
        raw
    };

    Ok(names.split(',').map(str::to_string).collect())
}
