//! CLI commands for budget progress
//!
//! Loads the spend map for the needed window, runs the budget services and
//! prints the result as text or JSON.

use std::io::Write;

use chrono::{Days, NaiveDate};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{
    format_ledger, format_message, format_monthly, format_snapshot, format_today, format_weekly,
};
use crate::error::{RolloverError, RolloverResult};
use crate::export::{export_ledger_csv, export_ledger_json, export_ledger_yaml};
use crate::models::calendar::{month_end, month_of, month_start, parse_date_key, week_end, week_start};
use crate::models::PositiveMessage;
use crate::services::{
    build_ledger, monthly_progress, today_status, under_budget_streak, weekly_progress,
    BudgetSnapshot,
};
use crate::storage::Storage;

/// Output format for the ledger command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LedgerFormat {
    Table,
    Csv,
    Json,
    Yaml,
}

/// Progress report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show today's limit, rollover and spending
    Today {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show progress for the week containing a date
    Week {
        /// Any date in the week (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show progress and projection for a month
    Month {
        /// Month to report (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the day-by-day rollover ledger
    Ledger {
        /// First day (YYYY-MM-DD), defaults to the start of the month
        #[arg(short, long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        to: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: LedgerFormat,
    },

    /// Show today, week, month and an encouraging message
    #[command(alias = "dashboard")]
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Count consecutive days within the daily limit
    Streak {
        /// How many days back to look
        #[arg(long, default_value = "30")]
        days: u32,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> RolloverResult<()> {
    let limit = settings.daily_limit;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Today { json } => {
            let (year, month) = month_of(today);
            let spend = storage.expenses.spend_map(month_start(year, month), today)?;
            let status = today_status(&spend, limit, today);
            print_output(json, &status, || format_today(&status, symbol))
        }
        ReportCommands::Week { date, json } => {
            let reference = parse_optional_date(date.as_deref(), today)?;
            let start = week_start(reference, settings.week_starts_on);
            let end = week_end(reference, settings.week_starts_on);
            let spend = storage.expenses.spend_map(start, end)?;
            let progress = weekly_progress(&spend, limit, reference, settings.week_starts_on, today);
            print_output(json, &progress, || format_weekly(&progress, symbol))
        }
        ReportCommands::Month { month, json } => {
            let (year, month) = match month {
                Some(s) => parse_month(&s)?,
                None => month_of(today),
            };
            let spend = storage
                .expenses
                .spend_map(month_start(year, month), month_end(year, month))?;
            let progress = monthly_progress(&spend, limit, year, month, today);
            print_output(json, &progress, || format_monthly(&progress, symbol))
        }
        ReportCommands::Ledger { from, to, format } => {
            let (year, month) = month_of(today);
            let start = match from {
                Some(s) => parse_date_key(&s)?,
                None => month_start(year, month),
            };
            let end = parse_optional_date(to.as_deref(), today)?;
            let spend = storage.expenses.spend_map(start, end)?;
            let ledger = build_ledger(&spend, limit, start, end);

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match format {
                LedgerFormat::Table => {
                    writeln!(out, "{}", format_ledger(&ledger, symbol))?;
                }
                LedgerFormat::Csv => export_ledger_csv(&ledger, &mut out)?,
                LedgerFormat::Json => export_ledger_json(&ledger, &mut out)?,
                LedgerFormat::Yaml => export_ledger_yaml(&ledger, &mut out)?,
            }
            Ok(())
        }
        ReportCommands::Summary { json } => {
            let policy = settings.policy();
            let (start, end) = BudgetSnapshot::spend_window(&policy, today);
            let spend = storage.expenses.spend_map(start, end)?;
            let snapshot = BudgetSnapshot::compute(&spend, &policy, today);
            print_output(json, &snapshot, || format_snapshot(&snapshot, symbol))
        }
        ReportCommands::Streak { days } => {
            let start = today
                .checked_sub_days(Days::new(u64::from(days.max(1) - 1)))
                .unwrap_or(today);
            let spend = storage.expenses.spend_map(start, today)?;
            let ledger = build_ledger(&spend, limit, start, today);
            let streak = under_budget_streak(&ledger);

            println!("Current streak: {} day(s) within your daily limit", streak);
            if streak > 1 {
                let message = PositiveMessage::streak(streak);
                println!("{}", format_message(Some(&message), symbol));
            }
            Ok(())
        }
    }
}

fn print_output<T, F>(json: bool, value: &T, render: F) -> RolloverResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render());
    }
    Ok(())
}

fn parse_optional_date(value: Option<&str>, default: NaiveDate) -> RolloverResult<NaiveDate> {
    match value {
        Some(s) => parse_date_key(s),
        None => Ok(default),
    }
}

/// Parse "YYYY-MM" into a year and zero-indexed month
pub fn parse_month(s: &str) -> RolloverResult<(i32, i32)> {
    let invalid = || RolloverError::Validation(format!("Invalid month '{}', expected YYYY-MM", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: i32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month - 1))
}
