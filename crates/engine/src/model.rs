use std::collections::HashMap;

use serde::Serialize;

/// Cell value emitted upstream when text extraction could not read a field.
pub const UNREADABLE_SENTINEL: &str = "???";

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A single tabulated list row: user columns plus engine annotations.
///
/// Cells are an open string-keyed map so columns can be added or removed
/// after tabulation. Annotations live as fixed struct fields and therefore
/// can never collide with a user column name.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub cells: HashMap<String, String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<RowWarning>,
    /// Tri-state: `None` until reconciled or when the mark cell is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_note: Option<String>,
}

impl Row {
    /// Cell value for `column`, or "" when the column is absent.
    pub fn cell(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// Set or add a cell. Callers keep `Table::headers` in sync.
    pub fn set_cell(&mut self, column: &str, value: impl Into<String>) {
        self.cells.insert(column.to_string(), value.into());
    }
}

/// Per-row data-quality state. At most one applies per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowWarning {
    Unreadable,
    Incomplete,
    Empty,
}

impl std::fmt::Display for RowWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable => write!(f, "unreadable"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// Tabulated output: ordered unique headers, row records, and the number of
/// noise lines excluded during tokenization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub skipped: usize,
}

impl Table {
    /// Empty-input status: the text had no tabulatable lines.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// An external model object carrying a mark property, identified by an
/// opaque container + member id pair.
#[derive(Debug, Clone)]
pub struct Entity {
    pub container_id: String,
    pub member_id: String,
    pub mark: String,
}

/// Back-reference to a matched entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub container_id: String,
    pub member_id: String,
}

// ---------------------------------------------------------------------------
// Reconciliation output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReconcileSummary {
    pub total_rows: usize,
    pub found: usize,
    pub not_found: usize,
    pub quantity_mismatches: usize,
    /// Rows excluded from matching because the mark cell was empty.
    pub unkeyed: usize,
}

/// Selection targets for one container, deduplicated and sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionGroup {
    pub container_id: String,
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconcileMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub meta: ReconcileMeta,
    pub summary: ReconcileSummary,
    /// Each mark repeated per declared quantity, in row order.
    pub expected: Vec<String>,
    pub selection: Vec<SelectionGroup>,
}
