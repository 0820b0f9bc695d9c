//! Custom error types for Pocketbook
//!
//! Domain conditions (bad input, insufficient funds, unknown goal) are ordinary
//! error values here; nothing in the ledger engine panics on user input.

use thiserror::Error;

use crate::models::Money;

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors (non-positive amounts, past dates, blank names)
    #[error("Validation error: {0}")]
    Validation(String),

    /// An expense larger than the current balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// No ledger file has been created yet
    #[error("No ledger found at {0}")]
    LedgerMissing(String),

    /// The ledger file exists but cannot be used
    #[error("Ledger file is malformed: {0}")]
    LedgerMalformed(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PocketbookError {
    /// Create a "not found" error for financial goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Financial goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an insufficient funds rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Check if the ledger is absent or unusable, in which case the caller
    /// should offer to create a new one
    pub fn needs_new_ledger(&self) -> bool {
        matches!(self, Self::LedgerMissing(_) | Self::LedgerMalformed(_))
    }
}

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;
