//! Storage layer for Pocketbook
//!
//! Loads and saves the single ledger file with atomic writes. The ledger engine
//! itself never touches the filesystem; the CLI and dashboard go through
//! [`Storage`].

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_required, write_json_atomic};
pub use ledger::{Ledger, LedgerFile, SCHEMA_VERSION};

use tracing::{debug, info};

use crate::config::paths::PocketbookPaths;
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Money;

/// Ledger file access
pub struct Storage {
    paths: PocketbookPaths,
}

impl Storage {
    pub fn new(paths: PocketbookPaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    /// Check if a ledger file exists
    pub fn exists(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Load the ledger
    ///
    /// A missing file gives `LedgerMissing`; a file that cannot be parsed or
    /// that breaks the ledger rules gives `LedgerMalformed`.
    pub fn load(&self) -> PocketbookResult<Ledger> {
        let path = self.paths.ledger_file();
        if !path.exists() {
            return Err(PocketbookError::LedgerMissing(path.display().to_string()));
        }

        let file: LedgerFile = read_json_required(&path).map_err(|e| match e {
            PocketbookError::Json(msg) => PocketbookError::LedgerMalformed(msg),
            other => other,
        })?;

        let ledger = Ledger::from_file(file)?;
        debug!(
            path = %path.display(),
            transactions = ledger.account.transaction_count(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    /// Save the ledger atomically
    pub fn save(&self, ledger: &Ledger) -> PocketbookResult<()> {
        self.paths.ensure_directories()?;
        let path = self.paths.ledger_file();
        write_json_atomic(&path, &ledger.to_file())?;
        info!(path = %path.display(), "saved ledger");
        Ok(())
    }

    /// Create and save a new ledger
    ///
    /// Refuses to replace an existing ledger unless `overwrite` is set.
    pub fn create(
        &self,
        owner_name: &str,
        initial_balance: Money,
        overwrite: bool,
    ) -> PocketbookResult<Ledger> {
        if self.exists() && !overwrite {
            return Err(PocketbookError::Duplicate {
                entity_type: "Ledger",
                identifier: self.paths.ledger_file().display().to_string(),
            });
        }

        let ledger = Ledger::open(owner_name, initial_balance)?;
        self.save(&ledger)?;
        Ok(ledger)
    }
}
