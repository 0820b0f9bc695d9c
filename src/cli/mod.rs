//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger. Every handler that changes
//! the ledger loads it, applies the change and saves only when the change
//! succeeded.

pub mod account;
pub mod budget;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, handle_init, handle_status, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{
    handle_categories, handle_entry, handle_history, EntryArgs, HistoryArgs,
};

use chrono::NaiveDate;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, MonthPeriod};

/// Parse an amount typed by the user ("150000", "150,000", "Rp 1.500.000")
pub fn parse_amount(input: &str) -> PocketbookResult<Money> {
    Money::parse(input).map_err(|e| {
        PocketbookError::Validation(format!("Invalid amount '{}': {}", input, e))
    })
}

/// Parse a calendar date as YYYY-MM-DD or DD/MM/YYYY
pub fn parse_date(input: &str) -> PocketbookResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d/%m/%Y"))
        .map_err(|_| {
            PocketbookError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or DD/MM/YYYY",
                input
            ))
        })
}

/// Parse an optional "YYYY-MM" argument, defaulting to the current month
pub fn parse_month(input: Option<&str>) -> PocketbookResult<MonthPeriod> {
    match input {
        Some(s) => MonthPeriod::parse(s).map_err(|e| PocketbookError::Validation(e.to_string())),
        None => Ok(MonthPeriod::current()),
    }
}
