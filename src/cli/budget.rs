//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_alerts, format_budget_usage};
use crate::error::PocketbookResult;
use crate::storage::Storage;

use super::{parse_amount, parse_month};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category (replaces an existing one)
    Set {
        /// Category name (exact match against transactions)
        category: String,
        /// Monthly limit
        limit: String,
    },
    /// Show spending against every budget
    List {
        /// Month in YYYY-MM form (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show budgets that are over or near their limit
    Alerts {
        /// Month in YYYY-MM form (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PocketbookResult<()> {
    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = parse_amount(&limit)?;
            let mut ledger = storage.load()?;

            let replaced = ledger.manager.budget(category.trim()).is_some();
            ledger.manager.add_budget(&category, limit)?;
            storage.save(&ledger)?;

            let verb = if replaced { "Updated" } else { "Set" };
            println!(
                "{} budget for {}: {} per month",
                verb,
                category.trim(),
                settings.format_money(limit)
            );
        }

        BudgetCommands::List { month } => {
            let period = parse_month(month.as_deref())?;
            let ledger = storage.load()?;

            println!("Budgets for {}", period.label());
            let usages = ledger.manager.check_all_budgets(&ledger.account, period);
            println!("{}", format_budget_usage(&usages, settings));
        }

        BudgetCommands::Alerts { month } => {
            let period = parse_month(month.as_deref())?;
            let ledger = storage.load()?;

            let alerts = ledger.manager.budget_alerts(&ledger.account, period);
            println!("{}", format_alerts(&alerts));
        }
    }

    Ok(())
}
