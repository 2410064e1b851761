//! `mlist tabulate` — tokenize list text and preview the table.

use std::path::Path;

use marklist_engine::config::{Separator, ShortRowPolicy, TabulateConfig};
use marklist_engine::model::{Row, Table};
use marklist_engine::roles::{guess_mark_column, guess_quantity_column, KeyGuess};
use marklist_io::export::{self, ExportOptions};
use marklist_io::text::read_list_text;

use crate::exit_codes::EXIT_EMPTY_INPUT;
use crate::util::{display_width, pad_right};
use crate::CliError;

#[derive(serde::Serialize)]
struct TabulateOutput<'a> {
    headers: &'a [String],
    rows: &'a [Row],
    skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    mark_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity_column: Option<String>,
}

pub(crate) fn cmd_tabulate(
    file: &Path,
    separator: Separator,
    skip_short: bool,
    json: bool,
    output: Option<&Path>,
    quiet: bool,
) -> Result<(), CliError> {
    let text = read_list_text(file).map_err(CliError::io)?;

    let config = TabulateConfig {
        separator,
        short_rows: if skip_short { ShortRowPolicy::Skip } else { ShortRowPolicy::Pad },
        ..Default::default()
    };
    let table = marklist_engine::tabulate(&text, &config);

    if table.is_empty() {
        return Err(CliError {
            code: EXIT_EMPTY_INPUT,
            message: format!("empty input: no tabulatable lines in {}", file.display()),
            hint: None,
        });
    }

    let mark = guess_mark_column(&table.headers);
    let quantity = guess_quantity_column(&table.headers);

    if let Some(path) = output {
        let options = ExportOptions { delimiter: delimiter_for(path)?, annotations: false };
        export::export_path(&table, path, &options).map_err(CliError::io)?;
        if !quiet {
            eprintln!("wrote {} rows to {}", table.rows.len(), path.display());
        }
    }

    if json {
        let out = TabulateOutput {
            headers: &table.headers,
            rows: &table.rows,
            skipped: table.skipped,
            mark_column: mark.as_ref().map(|g| g.column.clone()),
            quantity_column: quantity.as_ref().map(|g| g.column.clone()),
        };
        let json_str = serde_json::to_string_pretty(&out)
            .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    } else if output.is_none() {
        print_preview(&table);
    }

    if !quiet {
        let flagged = table.rows.iter().filter(|r| r.warning.is_some()).count();
        eprintln!(
            "{} rows ({} skipped), {} flagged — mark={}, qty={}",
            table.rows.len(),
            table.skipped,
            flagged,
            describe(&mark),
            describe(&quantity),
        );
    }

    Ok(())
}

/// Pick the export delimiter from the output extension.
fn delimiter_for(path: &Path) -> Result<u8, CliError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(b','),
        Some("tsv") | Some("txt") => Ok(b'\t'),
        _ => Err(CliError::args(format!("cannot infer format of {}", path.display()))
            .with_hint("use a .csv, .tsv, or .txt output path")),
    }
}

fn describe(guess: &Option<KeyGuess>) -> String {
    match guess {
        Some(g) if g.by_keyword => g.column.clone(),
        Some(g) => format!("{} (fallback)", g.column),
        None => "?".to_string(),
    }
}

fn print_preview(table: &Table) {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .map(|header| {
            let mut width = display_width(header);
            for row in &table.rows {
                width = width.max(display_width(row.cell(header)));
            }
            width.min(24)
        })
        .collect();

    let header_line: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad_right(h, w))
        .collect();
    println!("{}", header_line.join("  "));

    for row in &table.rows {
        let line: Vec<String> = table
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| pad_right(row.cell(h), w))
            .collect();
        let mut printed = line.join("  ");
        if let Some(warning) = row.warning {
            printed = format!("{printed}  [{warning}]");
        }
        println!("{printed}");
    }
}
