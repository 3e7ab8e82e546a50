//! YAML Export functionality
//!
//! Exports a rollover ledger to YAML for human-readable review.

use std::io::Write;

use crate::error::{RolloverError, RolloverResult};
use crate::export::json::LedgerExport;
use crate::models::DailyBudgetStatus;

/// Export a ledger to YAML with a short comment header
pub fn export_ledger_yaml<W: Write>(
    ledger: &[DailyBudgetStatus],
    writer: &mut W,
) -> RolloverResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    let err = |e: std::io::Error| RolloverError::Export(e.to_string());
    writeln!(writer, "# daily-rollover ledger export").map_err(err)?;
    if let (Some(first), Some(last)) = (ledger.first(), ledger.last()) {
        writeln!(writer, "# Range: {} to {}", first.date, last.date).map_err(err)?;
    }
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RolloverError::Export(e.to_string()))?;

    Ok(())
}
