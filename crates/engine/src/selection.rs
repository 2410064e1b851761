//! Host-selection targets derived from reconciled rows.

use std::collections::{BTreeMap, BTreeSet};

use crate::index::MarkIndex;
use crate::model::{SelectionGroup, Table};

/// Collect the (container, member) pairs behind every found row, grouped by
/// container. Members are deduplicated and the whole output is
/// deterministically ordered.
pub fn group_found(table: &Table, mark_column: &str, index: &MarkIndex) -> Vec<SelectionGroup> {
    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for row in &table.rows {
        if row.found != Some(true) {
            continue;
        }
        if let Some(entry) = index.lookup(row.cell(mark_column)) {
            for entity_ref in &entry.refs {
                groups
                    .entry(entity_ref.container_id.clone())
                    .or_default()
                    .insert(entity_ref.member_id.clone());
            }
        }
    }

    groups
        .into_iter()
        .map(|(container_id, member_ids)| SelectionGroup {
            container_id,
            member_ids: member_ids.into_iter().collect(),
        })
        .collect()
}
