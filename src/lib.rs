//! Pocketbook - personal finance ledger for the terminal
//!
//! This library provides the core of the Pocketbook application: a single
//! account ledger of income and expense transactions, monthly category
//! budgets with alerts, and savings goals funded from the account.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data (money, transactions, the account, budgets, goals)
//! - `services`: `BudgetManager`, which owns budgets and goals
//! - `storage`: JSON persistence of the whole ledger
//! - `export`: CSV, JSON and YAML export
//! - `config`: Path resolution and user settings
//! - `display`: Text formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Read-only terminal dashboard
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use pocketbook::models::{Account, Money};
//!
//! let mut account = Account::new("Budi", Money::zero()).unwrap();
//! account
//!     .add_income(Money::from_units(5_000_000), "Monthly salary", "Salary")
//!     .unwrap();
//! account
//!     .add_expense(Money::from_units(1_500_000), "Rent", "Housing")
//!     .unwrap();
//!
//! assert_eq!(account.balance(), Money::from_units(3_500_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{PocketbookError, PocketbookResult};
