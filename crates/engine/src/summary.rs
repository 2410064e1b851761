//! Reconciliation summary statistics.

use crate::model::{ReconcileSummary, Row};

/// Count found / not-found / mismatch states across annotated rows.
pub fn compute_summary(rows: &[Row]) -> ReconcileSummary {
    let mut found = 0;
    let mut not_found = 0;
    let mut quantity_mismatches = 0;
    let mut unkeyed = 0;

    for row in rows {
        match row.found {
            Some(true) => {
                found += 1;
                if row.quantity_note.is_some() {
                    quantity_mismatches += 1;
                }
            }
            Some(false) => not_found += 1,
            None => unkeyed += 1,
        }
    }

    ReconcileSummary {
        total_rows: rows.len(),
        found,
        not_found,
        quantity_mismatches,
        unkeyed,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::classify::CONFIDENCE_OK;

    fn row(found: Option<bool>, note: Option<&str>) -> Row {
        Row {
            cells: HashMap::new(),
            confidence: CONFIDENCE_OK,
            warning: None,
            found,
            model_count: None,
            matched: None,
            quantity_note: note.map(str::to_string),
        }
    }

    #[test]
    fn summary_counts() {
        let rows = vec![
            row(Some(true), None),
            row(Some(true), Some("quantity mismatch: model=2, declared=3")),
            row(Some(false), None),
            row(None, None),
        ];
        let summary = compute_summary(&rows);
        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.found, 2);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.quantity_mismatches, 1);
        assert_eq!(summary.unkeyed, 1);
    }
}
