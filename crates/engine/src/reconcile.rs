//! Reconciliation entry point.

use crate::error::EngineError;
use crate::expand::{expand_marks, parse_quantity};
use crate::index::MarkIndex;
use crate::model::{Entity, ReconcileMeta, ReconcileReport, Table};
use crate::roles::ColumnRoles;
use crate::selection::group_found;
use crate::summary::compute_summary;

/// Reconcile table rows against discovered entities.
///
/// Annotates rows in place and returns the aggregate report. Fails fast when
/// either role column is undesignated or absent from the headers, so
/// matching never silently runs against the wrong field. An empty entity
/// list is a legitimate all-not-found result, not an error.
pub fn run(
    table: &mut Table,
    roles: &ColumnRoles,
    entities: &[Entity],
) -> Result<ReconcileReport, EngineError> {
    let (mark_column, quantity_column) = roles.resolved()?;
    for (role, column) in [("mark", mark_column), ("quantity", quantity_column)] {
        if !table.headers.iter().any(|h| h == column) {
            return Err(EngineError::UnknownColumn { role, column: column.to_string() });
        }
    }

    let index = MarkIndex::build(entities);

    for row in &mut table.rows {
        let mark = row.cell(mark_column).trim().to_string();
        if mark.is_empty() {
            row.found = None;
            row.model_count = None;
            row.matched = None;
            row.quantity_note = None;
            continue;
        }

        match index.lookup(&mark) {
            Some(entry) => {
                let declared = parse_quantity(row.cell(quantity_column));
                row.found = Some(true);
                row.model_count = Some(entry.count);
                row.matched = entry.refs.first().cloned();
                row.quantity_note = (entry.count != declared).then(|| {
                    format!("quantity mismatch: model={}, declared={declared}", entry.count)
                });
            }
            None => {
                row.found = Some(false);
                row.model_count = Some(0);
                row.matched = None;
                row.quantity_note = None;
            }
        }
    }

    let summary = compute_summary(&table.rows);
    let expected = expand_marks(table, mark_column, quantity_column);
    let selection = group_found(table, mark_column, &index);

    Ok(ReconcileReport {
        meta: ReconcileMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        expected,
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabulateConfig;
    use crate::tabulate::tabulate;

    fn entity(container: &str, member: &str, mark: &str) -> Entity {
        Entity {
            container_id: container.into(),
            member_id: member.into(),
            mark: mark.into(),
        }
    }

    fn list_table(text: &str) -> Table {
        tabulate(text, &TabulateConfig::default())
    }

    #[test]
    fn found_and_quantity_mismatch_annotations() {
        let mut table = list_table("Mark\tQty\nB-101\t3\nC-205\t2");
        let roles = ColumnRoles::guess(&table.headers);
        let entities = vec![
            entity("m1", "o1", "B-101"),
            entity("m1", "o2", "B-101"),
            entity("m1", "o3", "C-205"),
        ];

        let report = run(&mut table, &roles, &entities).unwrap();

        assert_eq!(table.rows[0].found, Some(true));
        assert_eq!(table.rows[0].model_count, Some(2));
        assert_eq!(
            table.rows[0].quantity_note.as_deref(),
            Some("quantity mismatch: model=2, declared=3")
        );
        assert_eq!(table.rows[1].found, Some(true));
        assert_eq!(table.rows[1].model_count, Some(1));
        assert_eq!(
            table.rows[1].quantity_note.as_deref(),
            Some("quantity mismatch: model=1, declared=2")
        );

        assert_eq!(report.summary.found, 2);
        assert_eq!(report.summary.not_found, 0);
        assert_eq!(report.summary.quantity_mismatches, 2);
        assert_eq!(report.expected, vec!["B-101", "B-101", "B-101", "C-205", "C-205"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut table = list_table("Mark\tQty\nb-101\t2");
        let roles = ColumnRoles::guess(&table.headers);
        let entities = vec![entity("m1", "o1", "B-101"), entity("m1", "o2", "B-101")];

        let report = run(&mut table, &roles, &entities).unwrap();

        assert_eq!(table.rows[0].found, Some(true));
        assert_eq!(table.rows[0].model_count, Some(2));
        assert_eq!(table.rows[0].quantity_note, None);
        assert_eq!(report.summary.quantity_mismatches, 0);
    }

    #[test]
    fn matched_quantities_carry_no_note() {
        let mut table = list_table("Mark\tQty\nB-101\t2");
        let roles = ColumnRoles::guess(&table.headers);
        let entities = vec![entity("m1", "o1", "B-101"), entity("m2", "o2", "B-101")];

        run(&mut table, &roles, &entities).unwrap();
        assert_eq!(table.rows[0].quantity_note, None);
        assert_eq!(table.rows[0].matched.as_ref().unwrap().container_id, "m1");
    }

    #[test]
    fn empty_entity_list_marks_everything_not_found() {
        let mut table = list_table("Mark\tQty\nB-101\t3\nC-205\t2");
        let roles = ColumnRoles::guess(&table.headers);

        let report = run(&mut table, &roles, &[]).unwrap();

        assert_eq!(report.summary.found, 0);
        assert_eq!(report.summary.not_found, 2);
        assert_eq!(table.rows[0].found, Some(false));
        assert_eq!(table.rows[0].model_count, Some(0));
        assert!(report.selection.is_empty());
    }

    #[test]
    fn empty_mark_rows_are_excluded_from_counts() {
        let mut table = list_table("Pos\tMark\tQty\n1\tB-101\t1\n2\t\t5");
        let roles =
            ColumnRoles::with_overrides(&table.headers, Some("Mark".into()), Some("Qty".into()))
                .unwrap();
        let entities = vec![entity("m1", "o1", "B-101")];

        let report = run(&mut table, &roles, &entities).unwrap();

        assert_eq!(report.summary.total_rows, 2);
        assert_eq!(report.summary.found, 1);
        assert_eq!(report.summary.not_found, 0);
        assert_eq!(report.summary.unkeyed, 1);
        assert_eq!(table.rows[1].found, None);
    }

    #[test]
    fn undesignated_roles_are_rejected() {
        let mut table = list_table("Mark\tQty\nB-101\t1");
        let roles = ColumnRoles { mark: None, quantity: Some("Qty".into()) };
        let err = run(&mut table, &roles, &[]).unwrap_err();
        assert!(matches!(err, EngineError::UnresolvedRole { role: "mark" }));
    }

    #[test]
    fn stale_role_columns_are_rejected() {
        let mut table = list_table("Mark\tQty\nB-101\t1");
        let roles = ColumnRoles { mark: Some("Gone".into()), quantity: Some("Qty".into()) };
        let err = run(&mut table, &roles, &[]).unwrap_err();
        assert!(matches!(err, EngineError::UnknownColumn { role: "mark", .. }));
    }

    #[test]
    fn rerun_overwrites_previous_annotations() {
        let mut table = list_table("Mark\tQty\nB-101\t1");
        let roles = ColumnRoles::guess(&table.headers);

        run(&mut table, &roles, &[entity("m1", "o1", "B-101")]).unwrap();
        assert_eq!(table.rows[0].found, Some(true));

        let report = run(&mut table, &roles, &[]).unwrap();
        assert_eq!(table.rows[0].found, Some(false));
        assert_eq!(table.rows[0].matched, None);
        assert_eq!(report.summary.found, 0);
    }

    #[test]
    fn selection_groups_by_container() {
        let mut table = list_table("Mark\tQty\nB-101\t2\nC-205\t1");
        let roles = ColumnRoles::guess(&table.headers);
        let entities = vec![
            entity("m2", "o9", "B-101"),
            entity("m1", "o1", "B-101"),
            entity("m1", "o1", "C-205"),
            entity("m1", "o4", "C-205"),
        ];

        let report = run(&mut table, &roles, &entities).unwrap();

        assert_eq!(report.selection.len(), 2);
        assert_eq!(report.selection[0].container_id, "m1");
        assert_eq!(report.selection[0].member_ids, vec!["o1", "o4"]);
        assert_eq!(report.selection[1].container_id, "m2");
        assert_eq!(report.selection[1].member_ids, vec!["o9"]);
    }
}
