//! Budget status records
//!
//! Plain value records produced by the calculation services. They are rebuilt
//! on every call and never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the rollover ledger
///
/// `remaining` is measured against the nominal `limit`, not against
/// `effective_limit`. Use [`DailyBudgetStatus::effective_remaining`] for the
/// rollover-adjusted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBudgetStatus {
    /// Calendar day (serialized as `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Nominal daily limit
    pub limit: f64,
    /// Amount spent on this day
    pub spent: f64,
    /// `limit - spent`, may be negative
    pub remaining: f64,
    /// Surplus carried in from earlier days, never negative
    pub rollover: f64,
    /// `limit + rollover`
    pub effective_limit: f64,
}

impl DailyBudgetStatus {
    /// Amount left against the rollover-adjusted limit
    pub fn effective_remaining(&self) -> f64 {
        self.effective_limit - self.spent
    }

    /// Whether the day stayed within the nominal limit
    pub fn is_within_limit(&self) -> bool {
        self.remaining >= 0.0
    }
}

/// Spending progress for the week containing a reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// `days_tracked * limit`
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    /// Zero when `total_budget` is zero
    pub percent_used: f64,
    /// Days of the week up to and including today
    pub days_tracked: u32,
    pub daily_breakdown: Vec<DailyBudgetStatus>,
}

/// Spending progress and projection for a calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProgress {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    /// Allowance for the whole month (`total_days * limit`)
    pub total_budget: f64,
    /// Spent over the elapsed days only
    pub total_spent: f64,
    /// `days_elapsed * limit`
    pub expected_spent_to_date: f64,
    /// `expected_spent_to_date - total_spent`; positive means under budget
    pub ahead_behind_amount: f64,
    /// Linear projection of month-end spending from the daily average
    pub projected_end_of_month: f64,
    /// Rollover carried into the last elapsed day
    pub rollover_accumulated: f64,
    pub days_elapsed: u32,
    pub total_days: u32,
}

impl MonthlyProgress {
    /// Whether spending is below the on-pace baseline
    pub fn is_ahead(&self) -> bool {
        self.ahead_behind_amount > 0.0
    }
}

/// Budget position for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayStatus {
    pub date: NaiveDate,
    pub daily_limit: f64,
    pub spent: f64,
    /// `daily_limit - spent`
    pub remaining: f64,
    pub rollover_from_yesterday: f64,
    /// `daily_limit + rollover_from_yesterday`
    pub effective_limit: f64,
    /// `remaining < 0`
    pub is_over: bool,
    /// `max(0, remaining)`
    pub saved_today: f64,
}
