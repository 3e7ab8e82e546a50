//! Monthly aggregator and projector
//!
//! Compares month-to-date spending against an on-pace baseline and projects
//! month-end spending from the realized daily average.

use chrono::NaiveDate;
use tracing::debug;

use super::ledger::build_ledger;
use crate::models::calendar::{days_in_month, month_end, month_start};
use crate::models::{DailySpendMap, MonthlyProgress};

/// Monthly progress for a zero-indexed `month`, never counting days after `today`
pub fn monthly_progress(
    spend: &DailySpendMap,
    limit: f64,
    year: i32,
    month: i32,
    today: NaiveDate,
) -> MonthlyProgress {
    let start = month_start(year, month);
    let end = month_end(year, month);
    let total_days = days_in_month(year, month);
    let window_end = end.min(today);

    let ledger = build_ledger(spend, limit, start, window_end);
    let days_elapsed = (ledger.len() as u32).min(total_days);
    let total_spent = ledger.iter().fold(0.0, |acc, d| acc + d.spent);

    let total_budget = f64::from(total_days) * limit;
    let expected_spent_to_date = f64::from(days_elapsed) * limit;
    let ahead_behind_amount = expected_spent_to_date - total_spent;

    // With nothing elapsed yet, assume spending exactly on pace
    let avg_daily_spending = if days_elapsed == 0 {
        limit
    } else {
        total_spent / f64::from(days_elapsed)
    };
    let projected_end_of_month = avg_daily_spending * f64::from(total_days);

    let rollover_accumulated = ledger.last().map(|d| d.rollover).unwrap_or(0.0);

    debug!(
        %start,
        days_elapsed,
        total_days,
        total_spent,
        projected_end_of_month,
        "computed monthly progress"
    );

    MonthlyProgress {
        month_start: start,
        month_end: end,
        total_budget,
        total_spent,
        expected_spent_to_date,
        ahead_behind_amount,
        projected_end_of_month,
        rollover_accumulated,
        days_elapsed,
        total_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn april_spend() -> DailySpendMap {
        [
            ("2025-04-01", 40.0),
            ("2025-04-02", 80.0),
            ("2025-04-03", 30.0),
            ("2025-04-04", 50.0),
            ("2025-04-20", 500.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_partial_month() {
        // April 2025 is month index 3 with 30 days
        let progress = monthly_progress(&april_spend(), 50.0, 2025, 3, date(2025, 4, 4));

        assert_eq!(progress.month_start, date(2025, 4, 1));
        assert_eq!(progress.month_end, date(2025, 4, 30));
        assert_eq!(progress.total_days, 30);
        assert_eq!(progress.days_elapsed, 4);
        assert_eq!(progress.total_budget, 1500.0);
        assert_eq!(progress.total_spent, 200.0);
        assert_eq!(progress.expected_spent_to_date, 200.0);
        assert_eq!(progress.ahead_behind_amount, 0.0);
        assert_eq!(progress.projected_end_of_month, 1500.0);
    }

    #[test]
    fn test_ahead_of_pace() {
        let progress = monthly_progress(&april_spend(), 60.0, 2025, 3, date(2025, 4, 4));
        assert_eq!(progress.expected_spent_to_date, 240.0);
        assert_eq!(progress.ahead_behind_amount, 40.0);
        assert!(progress.is_ahead());
    }

    #[test]
    fn test_rollover_accumulated_reads_last_day() {
        let progress = monthly_progress(&april_spend(), 50.0, 2025, 3, date(2025, 4, 4));
        // Day 1 +10, day 2 -30 -> 0, day 3 +20: day 4 carries in 20
        assert_eq!(progress.rollover_accumulated, 20.0);
    }

    #[test]
    fn test_past_month_counts_every_day() {
        let progress = monthly_progress(&april_spend(), 50.0, 2025, 3, date(2025, 6, 1));
        assert_eq!(progress.days_elapsed, 30);
        assert_eq!(progress.total_spent, 700.0);
        assert!((progress.projected_end_of_month - 700.0).abs() < 1e-9);
        assert_eq!(progress.ahead_behind_amount, 800.0);
    }

    #[test]
    fn test_future_month_falls_back_to_limit() {
        let progress = monthly_progress(&april_spend(), 50.0, 2025, 3, date(2025, 3, 15));
        assert_eq!(progress.days_elapsed, 0);
        assert_eq!(progress.total_spent, 0.0);
        assert!(progress.total_spent.is_sign_positive());
        assert_eq!(progress.expected_spent_to_date, 0.0);
        assert_eq!(progress.ahead_behind_amount, 0.0);
        assert_eq!(progress.rollover_accumulated, 0.0);
        assert_eq!(progress.projected_end_of_month, 1500.0);
        assert!(progress.projected_end_of_month.is_finite());
    }

    #[test]
    fn test_total_budget_uses_whole_month() {
        let progress = monthly_progress(&DailySpendMap::new(), 10.0, 2024, 1, date(2024, 2, 3));
        assert_eq!(progress.total_days, 29);
        assert_eq!(progress.total_budget, 290.0);
        assert_eq!(progress.days_elapsed, 3);
    }

    #[test]
    fn test_month_index_rolls_over() {
        let progress = monthly_progress(&DailySpendMap::new(), 10.0, 2024, 12, date(2025, 1, 10));
        assert_eq!(progress.month_start, date(2025, 1, 1));
        assert_eq!(progress.days_elapsed, 10);
    }
}
