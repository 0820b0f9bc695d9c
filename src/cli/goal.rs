//! Financial goal CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_goal_progress;
use crate::error::PocketbookResult;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name (must be unique)
        name: String,
        /// Amount to save
        target: String,
        /// Deadline (YYYY-MM-DD or DD/MM/YYYY), must be after today
        #[arg(short, long)]
        by: String,
    },
    /// Show progress on every goal
    List,
    /// Move money from the account toward a goal
    Save {
        /// Goal name (exact match)
        name: String,
        /// Amount to set aside
        amount: String,
        /// Description for the savings transaction
        #[arg(short, long)]
        description: Option<String>,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> PocketbookResult<()> {
    match cmd {
        GoalCommands::Add { name, target, by } => {
            let target = parse_amount(&target)?;
            let target_date = parse_date(&by)?;
            let mut ledger = storage.load()?;

            let id = ledger.manager.add_financial_goal(&name, target, target_date)?;
            storage.save(&ledger)?;

            println!(
                "Created goal '{}': {} by {} [{}]",
                name.trim(),
                settings.format_money(target),
                target_date,
                id
            );
        }

        GoalCommands::List => {
            let ledger = storage.load()?;
            let progress = ledger.manager.all_goals_progress();
            println!("{}", format_goal_progress(&progress, settings));
        }

        GoalCommands::Save {
            name,
            amount,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let mut ledger = storage.load()?;

            ledger.manager.save_for_goal(
                &name,
                amount,
                &mut ledger.account,
                description.as_deref(),
            )?;
            storage.save(&ledger)?;

            let progress = ledger
                .manager
                .goal(&name)
                .map(|g| g.progress())
                .map(|p| format!("{:.1}%", p.progress_percentage))
                .unwrap_or_default();

            println!(
                "Saved {} toward '{}' ({} of target)",
                settings.format_money(amount),
                name,
                progress
            );
            println!(
                "Balance: {}",
                settings.format_money(ledger.account.balance())
            );
        }
    }

    Ok(())
}
