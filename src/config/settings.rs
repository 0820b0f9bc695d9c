//! User settings for Pocketbook
//!
//! Display preferences only; nothing here changes how the ledger behaves.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::Money;

/// User settings persisted in `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for listings and CSV export (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of transactions `history` shows when no limit is given
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rp".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y %H:%M".to_string()
}

fn default_history_limit() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            history_limit: default_history_limit(),
        }
    }
}

/// Check that a strftime format contains only specifiers chrono understands
pub fn validate_date_format(format: &str) -> Result<(), PocketbookError> {
    if format.trim().is_empty() {
        return Err(PocketbookError::Config("Date format cannot be empty".into()));
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PocketbookError::Config(format!(
            "Invalid date format '{}'",
            format
        )));
    }

    Ok(())
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PocketbookError::Config(format!("Failed to parse settings file: {}", e)))?;

        if let Err(e) = validate_date_format(&settings.date_format) {
            warn!(error = %e, "ignoring stored date format");
            settings.date_format = default_date_format();
        }

        Ok(settings)
    }

    /// Change the timestamp format, rejecting formats chrono cannot render
    pub fn set_date_format(&mut self, format: &str) -> Result<(), PocketbookError> {
        validate_date_format(format)?;
        self.date_format = format.to_string();
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PocketbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
