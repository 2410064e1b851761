//! Row confidence classification.

use std::collections::HashMap;

use crate::model::{RowWarning, UNREADABLE_SENTINEL};

pub const CONFIDENCE_OK: f64 = 0.95;
pub const CONFIDENCE_UNREADABLE: f64 = 0.5;
pub const CONFIDENCE_INCOMPLETE: f64 = 0.6;
pub const CONFIDENCE_EMPTY: f64 = 0.3;

/// Classify a row's cells against the header count.
///
/// Priority: the unreadable sentinel dominates everything; then a partially
/// populated row is incomplete; a row with no populated cell at all is
/// empty. Exactly one state applies.
pub fn classify(cells: &HashMap<String, String>, header_count: usize) -> (f64, Option<RowWarning>) {
    if cells.values().any(|v| v == UNREADABLE_SENTINEL) {
        return (CONFIDENCE_UNREADABLE, Some(RowWarning::Unreadable));
    }

    let populated = cells.values().filter(|v| !v.is_empty()).count();
    if populated == 0 {
        return (CONFIDENCE_EMPTY, Some(RowWarning::Empty));
    }
    if populated < header_count {
        return (CONFIDENCE_INCOMPLETE, Some(RowWarning::Incomplete));
    }

    (CONFIDENCE_OK, None)
}
