//! Transaction CLI commands
//!
//! Recording income and expenses, browsing the history and listing
//! categories.

use clap::Args;

use crate::config::Settings;
use crate::display::format_history;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::category::{default_categories, suggest_category};
use crate::models::{HistoryFilter, TransactionKind};
use crate::storage::Storage;

use super::parse_amount;

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Amount (e.g., "150000", "150,000" or "Rp 150.000")
    pub amount: String,

    /// What the money was for
    pub description: Option<String>,

    /// Category; guessed from the description when omitted
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of most recent transactions to show (0 shows all)
    /// Number of most recent transactions to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show the whole history
    #[arg(short, long, conflicts_with = "limit")]
    pub all: bool,

    /// Only income or only expense
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Only this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Record an income or an expense
pub fn handle_entry(
    storage: &Storage,
    settings: &Settings,
    kind: TransactionKind,
    args: EntryArgs,
) -> PocketbookResult<()> {
    let amount = parse_amount(&args.amount)?;
    let description = args.description.unwrap_or_default();
    let category = match args.category {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => suggest_category(&description, kind).to_string(),
    };

    let mut ledger = storage.load()?;
    let id = match kind {
        TransactionKind::Income => ledger.account.add_income(amount, &description, &category)?,
        TransactionKind::Expense => ledger.account.add_expense(amount, &description, &category)?,
    };
    storage.save(&ledger)?;

    println!(
        "Recorded {} of {} ({}) [{}]",
        kind.as_str(),
        settings.format_money(amount),
        category,
        id
    );
    println!(
        "Balance: {}",
        settings.format_money(ledger.account.balance())
    );

    Ok(())
}

/// Show recent transactions
pub fn handle_history(
    storage: &Storage,
    settings: &Settings,
    args: HistoryArgs,
) -> PocketbookResult<()> {
    let kind = args
        .kind
        .as_deref()
        .map(|k| {
            TransactionKind::parse(k).ok_or_else(|| {
                PocketbookError::Validation(format!(
                    "Invalid kind '{}'. Use 'income' or 'expense'",
                    k
                ))
            })
        })
        .transpose()?;

    let limit = if args.all {
        None
    } else {
        Some(args.limit.unwrap_or(settings.history_limit))
    };

    let ledger = storage.load()?;
    let filter = HistoryFilter {
        kind,
        category: args.category.map(|c| c.trim().to_string()),
        limit,
    };
    let transactions = ledger.account.filtered_history(&filter);

    println!("{}", format_history(&transactions, settings));
    println!(
        "Showing {} of {} transactions. Balance: {}",
        transactions.len(),
        ledger.account.transaction_count(),
        settings.format_money(ledger.account.balance())
    );

    Ok(())
}

/// List the suggested categories plus any others already in use
pub fn handle_categories(storage: &Storage) -> PocketbookResult<()> {
    println!("Income categories:");
    for category in default_categories(TransactionKind::Income) {
        println!("  {}", category);
    }

    println!();
    println!("Expense categories:");
    for category in default_categories(TransactionKind::Expense) {
        println!("  {}", category);
    }

    if storage.exists() {
        let ledger = storage.load()?;
        let custom: Vec<&str> = ledger
            .account
            .categories()
            .into_iter()
            .filter(|c| {
                !default_categories(TransactionKind::Income).contains(c)
                    && !default_categories(TransactionKind::Expense).contains(c)
            })
            .collect();

        if !custom.is_empty() {
            println!();
            println!("Also used in this ledger:");
            for category in custom {
                println!("  {}", category);
            }
        }
    }

    Ok(())
}
