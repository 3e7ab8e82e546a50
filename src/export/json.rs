//! JSON Export functionality
//!
//! Exports a rollover ledger together with summary metadata.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{RolloverError, RolloverResult};
use crate::models::DailyBudgetStatus;
use crate::services::closing_rollover;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Total spent across the ledger
    pub total_spent: f64,

    /// Rollover carried out of the final day
    pub closing_rollover: f64,

    /// One entry per day
    pub days: Vec<DailyBudgetStatus>,
}

impl LedgerExport {
    pub fn from_ledger(ledger: &[DailyBudgetStatus]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            total_spent: ledger.iter().fold(0.0, |acc, d| acc + d.spent),
            closing_rollover: closing_rollover(ledger),
            days: ledger.to_vec(),
        }
    }
}

/// Export a ledger to pretty-printed JSON
pub fn export_ledger_json<W: Write>(
    ledger: &[DailyBudgetStatus],
    writer: &mut W,
) -> RolloverResult<()> {
    let export = LedgerExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| RolloverError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| RolloverError::Export(e.to_string()))?;
    Ok(())
}
