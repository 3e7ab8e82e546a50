//! Export module for daily-rollover
//!
//! Writes a rollover ledger in multiple formats:
//! - CSV: one row per day (spreadsheet-compatible)
//! - JSON: machine-readable, with totals
//! - YAML: human-readable, with totals

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_ledger_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;
