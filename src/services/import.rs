//! CSV import service
//!
//! Reads expenses from CSV files with a configurable column mapping, date
//! format and sign convention, then adds them to the expense repository.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{RolloverError, RolloverResult};
use crate::models::expense::parse_amount;
use crate::models::Expense;
use crate::storage::Storage;

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ImportMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Index of the description column
    pub description_column: Option<usize>,
    /// Date format string (e.g., "%Y-%m-%d", "%m/%d/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: u8,
    /// Flip signs, for bank exports that list spending as negative
    pub negate_amounts: bool,
}

impl Default for ImportMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            amount_column: 1,
            description_column: Some(2),
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: b',',
            negate_amounts: false,
        }
    }
}

impl ImportMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether first row is header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set whether amounts should be negated
    pub fn with_negated_amounts(mut self, negate: bool) -> Self {
        self.negate_amounts = negate;
        self
    }
}

/// Outcome of parsing one CSV row
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRow {
    /// A spend to import
    Expense(Expense),
    /// A valid row that is not a spend (zero or an inflow)
    Skipped,
    /// The row could not be parsed
    Error(String),
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of expenses imported
    pub imported: usize,
    /// Number of non-spend rows skipped
    pub skipped: usize,
    /// Error messages keyed by data row number (1-based)
    pub errors: Vec<(usize, String)>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse CSV data into one result per data row
    pub fn parse_csv<R: std::io::Read>(
        reader: R,
        mapping: &ImportMapping,
    ) -> RolloverResult<Vec<ParsedRow>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(mapping.has_header)
            .delimiter(mapping.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let row = match record {
                Ok(record) => parse_record(&record, mapping),
                Err(e) => ParsedRow::Error(format!("Error reading CSV record: {}", e)),
            };
            rows.push(row);
        }
        Ok(rows)
    }

    /// Import expenses from a CSV file and persist them
    pub fn import_file(
        &self,
        path: &std::path::Path,
        mapping: &ImportMapping,
    ) -> RolloverResult<ImportResult> {
        let file = std::fs::File::open(path).map_err(|e| {
            RolloverError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let rows = Self::parse_csv(file, mapping)?;
        let result = self.import_rows(rows)?;

        info!(
            imported = result.imported,
            skipped = result.skipped,
            errors = result.errors.len(),
            "imported expenses from {}",
            path.display()
        );
        Ok(result)
    }

    /// Add parsed rows to the repository and save
    pub fn import_rows(&self, rows: Vec<ParsedRow>) -> RolloverResult<ImportResult> {
        let mut result = ImportResult::default();

        for (idx, row) in rows.into_iter().enumerate() {
            match row {
                ParsedRow::Expense(expense) => {
                    self.storage.expenses.insert(expense)?;
                    result.imported += 1;
                }
                ParsedRow::Skipped => result.skipped += 1,
                ParsedRow::Error(message) => {
                    warn!(row = idx + 1, %message, "skipping unparseable CSV row");
                    result.errors.push((idx + 1, message));
                }
            }
        }

        if result.imported > 0 {
            self.storage.expenses.save()?;
        }
        Ok(result)
    }
}

fn parse_record(record: &StringRecord, mapping: &ImportMapping) -> ParsedRow {
    let date = match record.get(mapping.date_column) {
        Some(s) if !s.is_empty() => match parse_date(s, &mapping.date_format) {
            Some(date) => date,
            None => return ParsedRow::Error(format!("Could not parse date: '{}'", s)),
        },
        _ => return ParsedRow::Error("Missing date".to_string()),
    };

    let amount = match record.get(mapping.amount_column) {
        Some(s) if !s.is_empty() => match parse_amount(s) {
            Ok(amount) => amount,
            Err(_) => return ParsedRow::Error(format!("Could not parse amount: '{}'", s)),
        },
        _ => return ParsedRow::Error("Missing amount".to_string()),
    };
    let amount = if mapping.negate_amounts { -amount } else { amount };

    if amount <= 0.0 {
        return ParsedRow::Skipped;
    }

    let description = mapping
        .description_column
        .and_then(|col| record.get(col))
        .unwrap_or_default();

    ParsedRow::Expense(Expense::new(date, amount, description))
}

/// Parse a date with the configured format, falling back to common formats
fn parse_date(s: &str, primary_format: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Some(date);
    }

    ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d", "%d.%m.%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}
