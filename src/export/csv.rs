//! CSV Export functionality
//!
//! Exports a rollover ledger to CSV, one row per day.

use std::io::Write;

use crate::error::{RolloverError, RolloverResult};
use crate::models::DailyBudgetStatus;

/// Export a ledger to CSV with a header row
pub fn export_ledger_csv<W: Write>(
    ledger: &[DailyBudgetStatus],
    writer: &mut W,
) -> RolloverResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for day in ledger {
        csv_writer
            .serialize(day)
            .map_err(|e| RolloverError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| RolloverError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailySpendMap;
    use crate::services::build_ledger;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let spend: DailySpendMap = [("2025-01-02", 75.0)].into_iter().collect();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let ledger = build_ledger(&spend, 50.0, start, end);

        let mut output = Vec::new();
        export_ledger_csv(&ledger, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "date,limit,spent,remaining,rollover,effective_limit");
        assert_eq!(lines[1], "2025-01-01,50.0,0.0,50.0,0.0,50.0");
        assert_eq!(lines[2], "2025-01-02,50.0,75.0,-25.0,50.0,100.0");
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let mut output = Vec::new();
        export_ledger_csv(&[], &mut output).unwrap();
        assert!(output.is_empty());
    }
}
