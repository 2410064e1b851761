//! `mlist run` — config-driven tabulate + reconcile jobs.

use std::path::Path;

use marklist_engine::config::JobConfig;
use marklist_engine::roles::ColumnRoles;
use marklist_engine::{reconcile, tabulate};
use marklist_io::entities::load_entities_file;
use marklist_io::export::{self, ExportOptions};
use marklist_io::text::read_list_text;

use crate::exit_codes::{EXIT_EMPTY_INPUT, EXIT_RECON_UNMATCHED};
use crate::CliError;

pub(crate) fn cmd_run(
    config_path: &Path,
    json_output: bool,
    output_file: Option<&Path>,
    export_file: Option<&Path>,
    quiet: bool,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| CliError::io(format!("cannot read config: {e}")))?;
    let job = JobConfig::from_toml(&config_str).map_err(CliError::engine)?;

    // Resolve input paths relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let list_path = base_dir.join(&job.list.file);
    let text = read_list_text(&list_path).map_err(CliError::io)?;
    let mut table = tabulate(&text, &job.list.tabulate);
    if table.is_empty() {
        return Err(CliError {
            code: EXIT_EMPTY_INPUT,
            message: format!("empty input: no tabulatable lines in {}", list_path.display()),
            hint: None,
        });
    }

    let roles = ColumnRoles::with_overrides(
        &table.headers,
        job.roles.mark.clone(),
        job.roles.quantity.clone(),
    )
    .map_err(CliError::engine)?;

    let model_path = base_dir.join(&job.model.file);
    let (model_entities, dropped) =
        load_entities_file(&model_path, &job.model.columns).map_err(CliError::io)?;
    if dropped > 0 && !quiet {
        eprintln!("note: ignored {dropped} entity rows without a mark");
    }

    let report = reconcile::run(&mut table, &roles, &model_entities).map_err(CliError::engine)?;

    if let Some(path) = export_file {
        let options = ExportOptions { delimiter: b',', annotations: true };
        export::export_path(&table, path, &options).map_err(CliError::io)?;
        if !quiet {
            eprintln!("wrote annotated table to {}", path.display());
        }
    }

    let json_str = serde_json::to_string_pretty(&report)
        .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;

    if let Some(path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &report.summary;
    eprintln!(
        "reconcile '{}': {} rows — {} found, {} not found, {} quantity mismatches, {} unkeyed",
        job.name, s.total_rows, s.found, s.not_found, s.quantity_mismatches, s.unkeyed,
    );

    if s.not_found > 0 || s.quantity_mismatches > 0 {
        return Err(CliError {
            code: EXIT_RECON_UNMATCHED,
            message: "unreconciled marks found".into(),
            hint: None,
        });
    }

    Ok(())
}

pub(crate) fn cmd_validate(config_path: &Path) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| CliError::io(format!("cannot read config: {e}")))?;
    let job = JobConfig::from_toml(&config_str).map_err(CliError::engine)?;
    println!("config OK: {}", job.name);
    Ok(())
}
