//! Core data models for Pocketbook
//!
//! The ledger engine: the account with its transactions, monthly budgets,
//! savings goals and the value types they share.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use account::{Account, CategoryTotals, HistoryFilter, MonthlySummary, RegisterLine};
pub use budget::{Budget, BudgetUsage, BudgetValidationError, WARNING_THRESHOLD};
pub use goal::{FinancialGoal, GoalProgress, GoalValidationError};
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use period::MonthPeriod;
pub use snapshot::{AccountSnapshot, TransactionRecord};
pub use transaction::{Transaction, TransactionKind};
