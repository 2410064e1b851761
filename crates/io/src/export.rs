// CSV/TSV table export

use std::path::Path;

use marklist_engine::model::Table;

/// Annotation columns appended after the user columns when requested.
const ANNOTATION_HEADERS: &[&str] = &["Found", "Model Qty", "Warning", "Note"];

#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub delimiter: u8,
    /// Append the reconciliation annotation columns.
    pub annotations: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { delimiter: b',', annotations: false }
    }
}

/// Serialize a table through the csv writer, which quotes any cell
/// containing the delimiter.
pub fn to_string(table: &Table, options: &ExportOptions) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_writer(Vec::new());

    let mut header_record: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    if options.annotations {
        header_record.extend_from_slice(ANNOTATION_HEADERS);
    }
    writer.write_record(&header_record).map_err(|e| e.to_string())?;

    for row in &table.rows {
        let mut record: Vec<String> =
            table.headers.iter().map(|h| row.cell(h).to_string()).collect();
        if options.annotations {
            record.push(match row.found {
                Some(true) => "yes".into(),
                Some(false) => "no".into(),
                None => String::new(),
            });
            record.push(row.model_count.map(|n| n.to_string()).unwrap_or_default());
            record.push(row.warning.map(|w| w.to_string()).unwrap_or_default());
            record.push(row.quantity_note.clone().unwrap_or_default());
        }
        writer.write_record(&record).map_err(|e| e.to_string())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Tab-delimited text for clipboard hand-off, user columns only.
pub fn clipboard_text(table: &Table) -> Result<String, String> {
    to_string(table, &ExportOptions { delimiter: b'\t', annotations: false })
}

pub fn export_path(table: &Table, path: &Path, options: &ExportOptions) -> Result<(), String> {
    let data = to_string(table, options)?;
    std::fs::write(path, data).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
