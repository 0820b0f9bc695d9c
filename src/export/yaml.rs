//! YAML Export functionality
//!
//! Same content as the JSON export, in a form that is easier to read by eye.

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::json::FullExport;
use crate::storage::Ledger;

fn export_error(e: impl std::fmt::Display) -> PocketbookError {
    PocketbookError::Export(e.to_string())
}

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> PocketbookResult<()> {
    let export = FullExport::from_ledger(ledger);

    writeln!(writer, "# Pocketbook ledger export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(export_error)?;

    Ok(())
}

/// Read a YAML export back into a ledger
pub fn import_from_yaml(yaml_str: &str) -> PocketbookResult<Ledger> {
    let export: FullExport = serde_yaml::from_str(yaml_str).map_err(export_error)?;
    export.to_ledger()
}
