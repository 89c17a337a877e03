use thiserror::Error;

/// Everything that can go wrong while expanding a column. Any of these aborts
/// the whole conversion; there is no warn-and-continue path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error(
        "\"expand_cols_into\" should either be wrapped in quotes or not wrapped in quotes; \
         instead it has a quote on one side only: {0}"
    )]
    UnbalancedQuotes(String),

    #[error("input path {0} does not end in .csv, cannot derive the output file name")]
    NonCsvPath(String),

    #[error("input CSV has no header row")]
    EmptyInput,

    #[error("column {0:?} was not found in the header row")]
    ColumnNotFound(String),

    #[error("value at row {row}, col {col} ({value:?}) could not be converted to a tuple")]
    TupleParse { row: usize, col: usize, value: String },

    #[error(
        "value at row {row}, col {col} ({value:?}) was converted to a tuple with {found} \
         values but {expected} destination columns were given"
    )]
    ArityMismatch {
        row: usize,
        col: usize,
        value: String,
        found: usize,
        expected: usize,
    },
}
