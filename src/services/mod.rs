//! Service layer for Pocketbook
//!
//! Operations that span more than one model: budgets and goals evaluated
//! against the account.

pub mod budget_manager;

pub use budget_manager::{BudgetAlert, BudgetManager};
