/// Parse a tuple-cell such as `"(1,2,3)"` or `"[1,2,3]"` into its elements.
///
/// The cell is trimmed of surrounding whitespace, the outer bracket pair is
/// stripped (it must match: `(` with `)`, `[` with `]`), and the remainder is
/// split on `,`. Elements are returned as-is, without trimming, so
/// `"(1, 2)"` yields `["1", " 2"]`. An empty pair `"()"` yields a single
/// empty element, not zero elements.
///
/// Returns `None` when the cell does not match the grammar.
pub fn parse_tuple_cell(raw: &str) -> Option<Vec<&str>> {
    let trimmed = raw.trim();

    let inner = strip_pair(trimmed, '(', ')').or_else(|| strip_pair(trimmed, '[', ']'))?;

    Some(inner.split(',').collect())
}

fn strip_pair(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}
