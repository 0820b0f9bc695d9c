//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_summary, format_monthly_summary};
use crate::error::PocketbookResult;
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expense and net for one month
    Monthly {
        /// Month in YYYY-MM form (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Totals per category over the whole history
    Categories,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> PocketbookResult<()> {
    let ledger = storage.load()?;

    match cmd {
        ReportCommands::Monthly { month } => {
            let period = parse_month(month.as_deref())?;
            let summary = ledger.account.monthly_summary(period);
            print!("{}", format_monthly_summary(&summary, settings));
        }
        ReportCommands::Categories => {
            let summary = ledger.account.category_summary();
            println!("{}", format_category_summary(&summary, settings));
        }
    }

    Ok(())
}
