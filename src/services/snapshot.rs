//! Budget snapshot
//!
//! Computes today's status, the current week, the current month and the
//! positive message for one reference date. Each aggregate runs its own
//! ledger independently; the message is selected last.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::messages::select_message;
use super::monthly::monthly_progress;
use super::today::today_status;
use super::weekly::weekly_progress;
use crate::models::calendar::{month_of, month_start, week_start};
use crate::models::{
    BudgetPolicy, DailySpendMap, MonthlyProgress, PositiveMessage, TodayStatus, WeeklyProgress,
};

/// Everything a dashboard needs for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub today: TodayStatus,
    pub weekly: WeeklyProgress,
    pub monthly: MonthlyProgress,
    pub message: Option<PositiveMessage>,
}

impl BudgetSnapshot {
    /// Compute the snapshot for `today`
    pub fn compute(spend: &DailySpendMap, policy: &BudgetPolicy, today: NaiveDate) -> Self {
        let limit = policy.daily_limit;
        let (year, month) = month_of(today);

        let today_status = today_status(spend, limit, today);
        let weekly = weekly_progress(spend, limit, today, policy.week_starts_on, today);
        let monthly = monthly_progress(spend, limit, year, month, today);
        let message = select_message(&today_status, &weekly, &monthly);

        Self {
            today: today_status,
            weekly,
            monthly,
            message,
        }
    }

    /// Date range a spend map must cover for [`BudgetSnapshot::compute`]
    ///
    /// The week can begin in the previous month, so the window starts at
    /// whichever of the week start and month start comes first.
    pub fn spend_window(policy: &BudgetPolicy, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let (year, month) = month_of(today);
        let start = month_start(year, month).min(week_start(today, policy.week_starts_on));
        (start, today)
    }
}
