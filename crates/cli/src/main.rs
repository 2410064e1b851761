// marklist CLI - headless mark-list reconciliation

mod exit_codes;
mod run;
mod tabulate;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use exit_codes::{EXIT_RECON_INVALID_CONFIG, EXIT_RECON_RUNTIME, EXIT_SUCCESS, EXIT_USAGE};
use marklist_engine::config::Separator;
use marklist_engine::error::EngineError;

#[derive(Parser)]
#[command(name = "mlist")]
#[command(about = "Mark-list tabulation and model reconciliation (headless)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize OCR or pasted list text into a table
    #[command(after_help = "\
Examples:
  mlist tabulate list.txt
  mlist tabulate scan.txt --sep spaces --skip-short
  mlist tabulate list.txt --json
  mlist tabulate list.txt -o table.csv")]
    Tabulate {
        /// Input text file
        file: PathBuf,

        /// Field separator
        #[arg(long, value_enum, default_value_t = SepArg::Auto)]
        sep: SepArg,

        /// Drop short rows instead of padding them
        #[arg(long)]
        skip_short: bool,

        /// Output JSON to stdout instead of a preview
        #[arg(long)]
        json: bool,

        /// Write the table to a .csv or .tsv file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Suppress stderr notes
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Run a tabulate + reconcile job from a TOML config
    #[command(after_help = "\
Examples:
  mlist run job.toml
  mlist run job.toml --json
  mlist run job.toml --output report.json --export reconciled.csv")]
    Run {
        /// Path to the job .toml config file
        config: PathBuf,

        /// Output the JSON report to stdout instead of a human summary
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the annotated table as CSV
        #[arg(long)]
        export: Option<PathBuf>,

        /// Suppress stderr notes
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a job config without running it
    #[command(after_help = "\
Examples:
  mlist validate job.toml")]
    Validate {
        /// Path to the job .toml config file
        config: PathBuf,
    },
}

/// Field separator argument; `spaces` means runs of two or more.
#[derive(Clone, Copy, ValueEnum)]
enum SepArg {
    Auto,
    Tab,
    Spaces,
}

impl From<SepArg> for Separator {
    fn from(arg: SepArg) -> Self {
        match arg {
            SepArg::Auto => Separator::Auto,
            SepArg::Tab => Separator::Tab,
            SepArg::Spaces => Separator::MultiSpace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tabulate { file, sep, skip_short, json, output, quiet } => {
            tabulate::cmd_tabulate(&file, sep.into(), skip_short, json, output.as_deref(), quiet)
        }
        Commands::Run { config, json, output, export, quiet } => {
            run::cmd_run(&config, json, output.as_deref(), export.as_deref(), quiet)
        }
        Commands::Validate { config } => run::cmd_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_RECON_RUNTIME, message: msg.into(), hint: None }
    }

    /// Map an engine error to the invalid-config code, with a hint where the
    /// fix is a config edit.
    pub fn engine(err: EngineError) -> Self {
        let hint = match &err {
            EngineError::UnresolvedRole { .. } => {
                Some("set [roles] mark/quantity in the job config".to_string())
            }
            EngineError::UnknownColumn { .. } => Some(
                "role names refer to normalized headers; run `mlist tabulate` to see them"
                    .to_string(),
            ),
            _ => None,
        };
        Self { code: EXIT_RECON_INVALID_CONFIG, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
