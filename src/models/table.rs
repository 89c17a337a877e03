/// In-memory contents of a CSV file: the header row plus the data rows.
///
/// Every data row has the same length as the header; the reader enforces
/// this on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
