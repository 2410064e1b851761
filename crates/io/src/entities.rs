// Entity inventory CSV loading

use std::path::Path;

use marklist_engine::config::EntityColumns;
use marklist_engine::model::Entity;

/// Load entities from CSV text using the configured header-name mapping.
///
/// Returns the entities plus the number of rows dropped for a missing mark
/// value; callers surface that count as a diagnostic. A headered but
/// row-less file yields an empty list, which reconciliation treats as
/// all-not-found.
pub fn load_entities(csv_data: &str, columns: &EntityColumns) -> Result<(Vec<Entity>, usize), String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let idx = |name: &str| -> Result<usize, String> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("missing column '{name}' in entity CSV"))
    };

    let container_idx = idx(&columns.container)?;
    let member_idx = idx(&columns.member)?;
    let mark_idx = idx(&columns.mark)?;

    let mut entities = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        let mark = record.get(mark_idx).unwrap_or("").trim();
        if mark.is_empty() {
            dropped += 1;
            continue;
        }
        entities.push(Entity {
            container_id: record.get(container_idx).unwrap_or("").to_string(),
            member_id: record.get(member_idx).unwrap_or("").to_string(),
            mark: mark.to_string(),
        });
    }

    Ok((entities, dropped))
}

/// File-path variant of [`load_entities`].
pub fn load_entities_file(
    path: &Path,
    columns: &EntityColumns,
) -> Result<(Vec<Entity>, usize), String> {
    let csv_data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    load_entities(&csv_data, columns)
}
