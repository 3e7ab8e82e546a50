//! Weekly aggregator
//!
//! Reduces the ledger for the week containing a reference date. Days after
//! `today` are never tracked, so the day count grows through the week.

use chrono::NaiveDate;
use tracing::debug;

use super::ledger::build_ledger;
use crate::models::calendar::{week_end, week_start};
use crate::models::{DailySpendMap, WeeklyProgress};

/// Percentage of `budget` used by `spent`, zero when there is no budget
pub(crate) fn percent_of(spent: f64, budget: f64) -> f64 {
    if budget == 0.0 {
        0.0
    } else {
        spent / budget * 100.0
    }
}

/// Weekly progress for the week containing `reference_date`
pub fn weekly_progress(
    spend: &DailySpendMap,
    limit: f64,
    reference_date: NaiveDate,
    week_starts_on: i32,
    today: NaiveDate,
) -> WeeklyProgress {
    let start = week_start(reference_date, week_starts_on);
    let end = week_end(reference_date, week_starts_on);
    let window_end = end.min(today);

    let daily_breakdown = build_ledger(spend, limit, start, window_end);
    let days_tracked = daily_breakdown.len() as u32;
    let total_spent = daily_breakdown.iter().fold(0.0, |acc, d| acc + d.spent);
    let total_budget = f64::from(days_tracked) * limit;
    let remaining = total_budget - total_spent;
    let percent_used = percent_of(total_spent, total_budget);

    debug!(%start, %end, days_tracked, total_spent, "computed weekly progress");

    WeeklyProgress {
        week_start: start,
        week_end: end,
        total_budget,
        total_spent,
        remaining,
        percent_used,
        days_tracked,
        daily_breakdown,
    }
}
