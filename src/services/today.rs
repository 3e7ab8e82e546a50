//! Today resolver
//!
//! Works out today's effective limit from the rollover earned since the start
//! of the month.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::ledger::{build_ledger, closing_rollover};
use crate::models::{DailySpendMap, TodayStatus};

/// Budget position for `today`
///
/// Rollover is rebuilt from the first of today's month through yesterday, so
/// it resets to zero on the first day of each month.
pub fn today_status(spend: &DailySpendMap, limit: f64, today: NaiveDate) -> TodayStatus {
    let rollover_from_yesterday = match (today.with_day(1), today.pred_opt()) {
        (Some(first), Some(yesterday)) => {
            let ledger = build_ledger(spend, limit, first, yesterday);
            closing_rollover(&ledger)
        }
        _ => 0.0,
    };

    let spent = spend.spent_on(today);
    let remaining = limit - spent;

    debug!(%today, spent, rollover_from_yesterday, "resolved today's status");

    TodayStatus {
        date: today,
        daily_limit: limit,
        spent,
        remaining,
        rollover_from_yesterday,
        effective_limit: limit + rollover_from_yesterday,
        is_over: remaining < 0.0,
        saved_today: remaining.max(0.0),
    }
}
