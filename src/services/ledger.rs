//! Rollover ledger builder
//!
//! Walks a date range one day at a time, carrying unspent budget forward.
//! The walk is strictly sequential: each day's rollover depends on every
//! earlier day in the range.

use chrono::NaiveDate;
use tracing::trace;

use crate::models::{DailyBudgetStatus, DailySpendMap};

/// Rollover carried out of a day, given what it carried in and its nominal
/// remaining amount
///
/// Surplus accumulates without a cap. A deficit eats into existing rollover
/// and floors at zero; any excess is dropped rather than carried as debt.
pub fn carry_forward(rollover: f64, remaining: f64) -> f64 {
    if remaining > 0.0 {
        rollover + remaining
    } else {
        (rollover + remaining).max(0.0)
    }
}

/// Build the day-by-day ledger for `[start, end]` inclusive
///
/// Returns an empty ledger when `start > end`. The limit is not validated.
pub fn build_ledger(
    spend: &DailySpendMap,
    limit: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyBudgetStatus> {
    let mut ledger = Vec::new();
    if start > end {
        return ledger;
    }

    let mut rollover = 0.0;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let spent = spend.spent_on(date);
        let remaining = limit - spent;

        ledger.push(DailyBudgetStatus {
            date,
            limit,
            spent,
            remaining,
            rollover,
            effective_limit: limit + rollover,
        });

        rollover = carry_forward(rollover, remaining);
    }

    trace!(%start, %end, days = ledger.len(), "built rollover ledger");
    ledger
}

/// Rollover that would carry into the day after the ledger's last day
pub fn closing_rollover(ledger: &[DailyBudgetStatus]) -> f64 {
    ledger
        .last()
        .map(|day| carry_forward(day.rollover, day.remaining))
        .unwrap_or(0.0)
}
