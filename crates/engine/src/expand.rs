//! Quantity parsing and expected-mark expansion.

use crate::model::Table;

/// Parse a declared quantity cell.
///
/// Accepts a comma as the decimal separator, floors to an integer, and
/// clamps to a minimum of 1. Empty or unparseable cells count as 1.
pub fn parse_quantity(raw: &str) -> usize {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => (n.floor() as i64).max(1) as usize,
        _ => 1,
    }
}

/// Flatten each row's mark repeated per declared quantity, in row order.
/// Rows with an empty mark cell contribute nothing.
pub fn expand_marks(table: &Table, mark_column: &str, quantity_column: &str) -> Vec<String> {
    let mut expected = Vec::new();
    for row in &table.rows {
        let mark = row.cell(mark_column).trim();
        if mark.is_empty() {
            continue;
        }
        let count = parse_quantity(row.cell(quantity_column));
        for _ in 0..count {
            expected.push(mark.to_string());
        }
    }
    expected
}
