//! Expense CLI commands
//!
//! Add, list, remove and import the dated expenses that feed the budget.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_expense_list};
use crate::error::{RolloverError, RolloverResult};
use crate::models::calendar::parse_date_key;
use crate::models::expense::parse_amount;
use crate::models::Expense;
use crate::services::{ImportMapping, ImportService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount spent (e.g., "12.50" or "$12.50")
        amount: String,

        /// Date spent (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// First day (YYYY-MM-DD)
        #[arg(short, long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Remove an expense by ID
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        id: String,
    },

    /// Import expenses from a CSV file (date, amount, description)
    Import {
        /// Path to CSV file
        file: PathBuf,

        /// Date format (strftime), defaults to the configured format
        #[arg(long)]
        date_format: Option<String>,

        /// The file has no header row
        #[arg(long)]
        no_header: bool,

        /// Flip signs (for exports that list spending as negative)
        #[arg(long)]
        negate: bool,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> RolloverResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(s) => parse_date_key(&s)?,
                None => today,
            };
            let expense = Expense::new(date, amount, description.unwrap_or_default());
            let id = expense.id;

            storage.expenses.insert(expense)?;
            storage.expenses.save()?;

            println!("Recorded {} on {}", format_amount(amount, symbol), date);
            println!("  ID: {}", id);
        }
        ExpenseCommands::List { from, to } => {
            let start = match from {
                Some(s) => parse_date_key(&s)?,
                None => NaiveDate::MIN,
            };
            let end = match to {
                Some(s) => parse_date_key(&s)?,
                None => NaiveDate::MAX,
            };
            let expenses = storage.expenses.get_by_date_range(start, end)?;
            print!("{}", format_expense_list(&expenses, symbol));
            if expenses.is_empty() {
                println!();
            }
        }
        ExpenseCommands::Remove { id } => {
            let id = Uuid::parse_str(id.trim())
                .map_err(|_| RolloverError::Validation(format!("Invalid expense ID: {}", id)))?;
            let removed = storage.expenses.remove(id)?;
            storage.expenses.save()?;

            println!(
                "Removed {} on {}",
                format_amount(removed.amount, symbol),
                removed.date
            );
        }
        ExpenseCommands::Import {
            file,
            date_format,
            no_header,
            negate,
        } => {
            let mapping = ImportMapping::new()
                .with_date_format(date_format.as_deref().unwrap_or(&settings.date_format))
                .with_header(!no_header)
                .with_negated_amounts(negate);

            let result = ImportService::new(storage).import_file(&file, &mapping)?;

            println!("Imported {} expense(s)", result.imported);
            if result.skipped > 0 {
                println!("Skipped {} non-spending row(s)", result.skipped);
            }
            if !result.errors.is_empty() {
                println!("{} row(s) could not be read:", result.errors.len());
                for (row, message) in &result.errors {
                    println!("  row {}: {}", row, message);
                }
            }
        }
    }

    Ok(())
}
