//! Display formatting for terminal output
//!
//! Turns ledger data into the text printed by the CLI: detail blocks, tables
//! and progress bars.

pub mod account;
pub mod budget;
pub mod report;
pub mod summary;

pub use account::{format_account_details, format_history};
pub use budget::{format_alerts, format_budget_usage, format_goal_progress};
pub use report::{format_bar, format_percentage, format_progress_bar, separator};
pub use summary::{format_category_summary, format_monthly_summary};
