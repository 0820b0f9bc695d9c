use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use pocketbook::cli::{
    handle_account_command, handle_budget_command, handle_categories, handle_entry,
    handle_export_command, handle_goal_command, handle_history, handle_init,
    handle_report_command, handle_status, AccountCommands, BudgetCommands, EntryArgs,
    ExportCommands, GoalCommands, HistoryArgs, ReportCommands,
};
use pocketbook::config::{PocketbookPaths, Settings};
use pocketbook::logging;
use pocketbook::models::TransactionKind;
use pocketbook::storage::Storage;
use pocketbook::PocketbookError;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "Pocketbook keeps a single account ledger of income and expenses, \
                  tracks monthly category budgets and savings goals, and exports \
                  everything to CSV, JSON or YAML."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new ledger
    Init {
        /// Account owner's name
        #[arg(short, long)]
        owner: String,
        /// Opening balance
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Replace an existing ledger
        #[arg(long)]
        force: bool,
    },

    /// Show the balance, this month's totals and budget alerts
    Status,

    /// Record income
    #[command(alias = "in")]
    Income(EntryArgs),

    /// Record an expense
    #[command(alias = "out")]
    Expense(EntryArgs),

    /// Show transaction history
    History(HistoryArgs),

    /// Monthly and per-category reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Monthly category budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goals
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Account details
    #[command(subcommand)]
    Account(AccountCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// List suggested categories and categories in use
    Categories,

    /// Show or change settings
    Config(ConfigArgs),

    /// Launch the dashboard
    #[command(alias = "ui")]
    Tui,
}

#[derive(Args)]
struct ConfigArgs {
    /// Currency symbol shown in front of amounts
    #[arg(long)]
    currency: Option<String>,

    /// Timestamp format (strftime), e.g. "%Y-%m-%d %H:%M"
    #[arg(long)]
    date_format: Option<String>,

    /// Default number of transactions shown by `history`
    #[arg(long)]
    history_limit: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone());

    let result = run(cli.command, &storage, &paths, settings);

    if let Err(err) = &result {
        if let Some(err) = err.downcast_ref::<PocketbookError>() {
            print_ledger_hint(err);
        }
    }

    result
}

fn run(
    command: Option<Commands>,
    storage: &Storage,
    paths: &PocketbookPaths,
    settings: Settings,
) -> Result<()> {
    match command {
        Some(Commands::Init {
            owner,
            balance,
            force,
        }) => handle_init(storage, &settings, &owner, &balance, force)?,
        Some(Commands::Status) => handle_status(storage, &settings)?,
        Some(Commands::Income(args)) => {
            handle_entry(storage, &settings, TransactionKind::Income, args)?
        }
        Some(Commands::Expense(args)) => {
            handle_entry(storage, &settings, TransactionKind::Expense, args)?
        }
        Some(Commands::History(args)) => handle_history(storage, &settings, args)?,
        Some(Commands::Report(cmd)) => handle_report_command(storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(storage, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(storage, &settings, cmd)?,
        Some(Commands::Account(cmd)) => handle_account_command(storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(storage, &settings, cmd)?,
        Some(Commands::Categories) => handle_categories(storage)?,
        Some(Commands::Config(args)) => handle_config(paths, settings, args)?,
        Some(Commands::Tui) => pocketbook::tui::run_tui(storage, &settings)?,
        None => {
            println!("Pocketbook - personal finance ledger");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            if !storage.exists() {
                println!("Run 'pocketbook init --owner <NAME>' to create your ledger.");
            }
        }
    }

    Ok(())
}

fn handle_config(
    paths: &PocketbookPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> Result<()> {
    let changed =
        args.currency.is_some() || args.date_format.is_some() || args.history_limit.is_some();

    if let Some(currency) = args.currency {
        settings.currency_symbol = currency.trim().to_string();
    }
    if let Some(format) = args.date_format {
        settings.set_date_format(&format)?;
    }
    if let Some(limit) = args.history_limit {
        settings.history_limit = limit;
    }

    if changed {
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Pocketbook Configuration");
    println!("========================");
    println!("Data directory:  {}", paths.base_dir().display());
    println!("Ledger file:     {}", paths.ledger_file().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Export dir:      {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  History limit:   {}", settings.history_limit);

    Ok(())
}

fn print_ledger_hint(err: &PocketbookError) {
    match err {
        PocketbookError::LedgerMissing(_) => {
            eprintln!("No ledger yet. Run 'pocketbook init --owner <NAME>' to create one.");
        }
        PocketbookError::LedgerMalformed(_) => {
            eprintln!(
                "The ledger file could not be read. Run 'pocketbook init --owner <NAME> --force' \
                 to start a new one (the old data will be replaced)."
            );
        }
        _ => {}
    }
}
