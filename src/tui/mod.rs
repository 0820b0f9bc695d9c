//! Terminal dashboard
//!
//! A read-only ratatui view over the ledger with tabs for the account
//! overview, transaction history, budgets and goals.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::{ActiveView, App};
pub use terminal::run_tui;
