//! Configuration module for Pocketbook
//!
//! Path resolution for the data directory and persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::Settings;
