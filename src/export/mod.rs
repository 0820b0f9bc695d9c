//! Export module for Pocketbook
//!
//! - CSV: the transaction register and monthly budget usage
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budgets_csv, export_transactions_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
