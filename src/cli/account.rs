//! Account CLI commands
//!
//! Ledger creation, the status overview and owner management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_account_details, format_alerts};
use crate::error::PocketbookResult;
use crate::models::MonthPeriod;
use crate::storage::Storage;

use super::parse_amount;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Show account details
    Show,
    /// Change the account owner's name
    Rename {
        /// New owner name
        name: String,
    },
}

/// Create a ledger, optionally replacing an existing one
pub fn handle_init(
    storage: &Storage,
    settings: &Settings,
    owner: &str,
    initial_balance: &str,
    force: bool,
) -> PocketbookResult<()> {
    let initial_balance = parse_amount(initial_balance)?;
    let replacing = storage.exists();

    let ledger = storage.create(owner, initial_balance, force)?;

    if replacing {
        println!("Replaced the existing ledger.");
    }
    println!(
        "Created ledger for {} with balance {}",
        ledger.account.owner_name(),
        settings.format_money(ledger.account.balance())
    );
    println!("Data file: {}", storage.paths().ledger_file().display());

    Ok(())
}

/// Print the account overview plus this month's alerts
pub fn handle_status(storage: &Storage, settings: &Settings) -> PocketbookResult<()> {
    let ledger = storage.load()?;
    let period = MonthPeriod::current();

    print!("{}", format_account_details(&ledger.account, settings));

    let summary = ledger.account.monthly_summary(period);
    println!();
    println!("This month ({}):", period.label());
    println!("  Income:   {}", settings.format_money(summary.total_income));
    println!("  Expense:  {}", settings.format_money(summary.total_expense));
    println!("  Net:      {}", settings.format_money(summary.net_income));

    let alerts = ledger.manager.budget_alerts(&ledger.account, period);
    if !alerts.is_empty() {
        println!();
        println!("{}", format_alerts(&alerts));
    }

    Ok(())
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> PocketbookResult<()> {
    match cmd {
        AccountCommands::Show => {
            let ledger = storage.load()?;
            print!("{}", format_account_details(&ledger.account, settings));
        }

        AccountCommands::Rename { name } => {
            let mut ledger = storage.load()?;
            let previous = ledger.account.owner_name().to_string();

            ledger.account.set_owner_name(&name)?;
            storage.save(&ledger)?;

            println!(
                "Renamed account owner: {} -> {}",
                previous,
                ledger.account.owner_name()
            );
        }
    }

    Ok(())
}
