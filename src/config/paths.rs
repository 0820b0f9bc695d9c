//! Path management for Pocketbook
//!
//! ## Path Resolution Order
//!
//! 1. `POCKETBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for "pocketbook" as reported by
//!    `directories` (`~/.config/pocketbook` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PocketbookError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "POCKETBOOK_DATA_DIR";

/// Manages all paths used by Pocketbook
#[derive(Debug, Clone)]
pub struct PocketbookPaths {
    base_dir: PathBuf,
}

impl PocketbookPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PocketbookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger (account, budgets and goals)
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Default target directory for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PocketbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PocketbookError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check whether a ledger has been created
    pub fn is_initialized(&self) -> bool {
        self.ledger_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PocketbookError> {
    ProjectDirs::from("", "", "pocketbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PocketbookError::Config("Could not determine home directory".into()))
}
