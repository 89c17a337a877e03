use crate::engine::tuple::parse_tuple_cell;
use crate::models::{error::ExpandError, expansion::ExpandSpec, table::Table};

/// Expand the spec's target column of `table` into one column per tuple
/// element, leaving every other column in place.
///
/// Headers other than the target are normalized on the way through: any name
/// containing the substring `"time"` (case-sensitive) becomes the literal
/// `"time"`. Destination names are taken verbatim, prefix included, and are
/// never normalized.
///
/// Fails on the first cell that does not parse as a tuple or whose element
/// count differs from the destination-column count; the caller gets no
/// partial result.
pub fn expand(table: &Table, spec: &ExpandSpec) -> Result<Table, ExpandError> {
    // First match wins when the header name is duplicated.
    let target = table
        .header
        .iter()
        .position(|name| *name == spec.column_name)
        .ok_or_else(|| ExpandError::ColumnNotFound(spec.column_name.clone()))?;

    let arity = spec.arity();
    let width = table.header.len() - 1 + arity;

    let mut header = Vec::with_capacity(width);
    for (col, name) in table.header.iter().enumerate() {
        if col == target {
            header.extend(
                spec.dest_names
                    .iter()
                    .map(|dest| format!("{}{}", spec.prefix, dest)),
            );
        } else if name.contains("time") {
            header.push("time".to_string());
        } else {
            header.push(name.clone());
        }
    }

    let mut rows = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        let mut out_row = Vec::with_capacity(width);

        for (col, cell) in row.iter().enumerate() {
            if col != target {
                out_row.push(cell.clone());
                continue;
            }

            let elements = parse_tuple_cell(cell).ok_or_else(|| ExpandError::TupleParse {
                row: row_idx,
                col,
                value: cell.clone(),
            })?;

            if elements.len() != arity {
                return Err(ExpandError::ArityMismatch {
                    row: row_idx,
                    col,
                    value: cell.clone(),
                    found: elements.len(),
                    expected: arity,
                });
            }

            out_row.extend(elements.into_iter().map(str::to_string));
        }

        rows.push(out_row);
    }

    Ok(Table { header, rows })
}
