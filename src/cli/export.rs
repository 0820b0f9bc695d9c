//! CLI commands for data export

use chrono::Local;
use clap::Subcommand;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{PocketbookError, PocketbookResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

use super::parse_month;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions (or budget usage) to CSV
    Csv {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export budget usage instead of transactions
        #[arg(long)]
        budgets: bool,

        /// Month for the budget export, YYYY-MM
        #[arg(short, long, requires = "budgets")]
        month: Option<String>,
    },

    /// Export the full ledger to JSON
    Json {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Export the full ledger to YAML
    Yaml {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> PocketbookResult<()> {
    let ledger = storage.load()?;

    match cmd {
        ExportCommands::Csv {
            output,
            budgets,
            month,
        } => {
            if budgets {
                let period = parse_month(month.as_deref())?;
                let output = resolve_output(storage, output, &format!("budgets_{}", period), "csv")?;
                let writer = create_writer(&output)?;

                csv::export_budgets_csv(&ledger.account, &ledger.manager, period, writer)?;
                println!(
                    "Exported {} budgets to: {}",
                    ledger.manager.budgets().count(),
                    output.display()
                );
            } else {
                let output = resolve_output(storage, output, "transactions", "csv")?;
                let writer = create_writer(&output)?;

                csv::export_transactions_csv(&ledger.account, &settings.date_format, writer)?;
                println!(
                    "Exported {} transactions to: {}",
                    ledger.account.transaction_count(),
                    output.display()
                );
            }
        }

        ExportCommands::Json { output, compact } => {
            let output = resolve_output(storage, output, "ledger", "json")?;
            let mut writer = create_writer(&output)?;

            json::export_full_json(&ledger, &mut writer, !compact)?;
            println!("Full ledger exported to: {}", output.display());
        }

        ExportCommands::Yaml { output } => {
            let output = resolve_output(storage, output, "ledger", "yaml")?;
            let mut writer = create_writer(&output)?;

            yaml::export_full_yaml(&ledger, &mut writer)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Use the given path, or a timestamped file in the exports directory
fn resolve_output(
    storage: &Storage,
    output: Option<PathBuf>,
    stem: &str,
    extension: &str,
) -> PocketbookResult<PathBuf> {
    if let Some(path) = output {
        return Ok(path);
    }

    let dir = storage.paths().export_dir();
    fs::create_dir_all(&dir).map_err(|e| {
        PocketbookError::Export(format!(
            "Failed to create export directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    Ok(dir.join(format!("{}_{}.{}", stem, timestamp, extension)))
}

fn create_writer(output: &PathBuf) -> PocketbookResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        PocketbookError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}
