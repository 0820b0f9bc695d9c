//! JSON Export functionality
//!
//! Exports the complete ledger wrapped with version and summary data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::storage::{Ledger, LedgerFile};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The ledger exactly as it would be saved
    pub ledger: LedgerFile,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub owner_name: String,
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,

    /// Timestamp of the first transaction
    pub earliest_transaction: Option<String>,

    /// Timestamp of the last transaction
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let file = ledger.to_file();

        let earliest_transaction = file
            .account
            .transactions
            .iter()
            .map(|t| t.timestamp)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = file
            .account
            .transactions
            .iter()
            .map(|t| t.timestamp)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            owner_name: file.account.owner_name.clone(),
            transaction_count: file.account.transactions.len(),
            budget_count: file.budgets.len(),
            goal_count: file.goals.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: file,
            metadata,
        }
    }

    /// Rebuild the live ledger from this export
    pub fn to_ledger(&self) -> PocketbookResult<Ledger> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(PocketbookError::Export(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            )));
        }
        Ledger::from_file(self.ledger.clone())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    ledger: &Ledger,
    writer: &mut W,
    pretty: bool,
) -> PocketbookResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| PocketbookError::Export(e.to_string()))
}
