//! Positive message selection
//!
//! Picks at most one encouraging message from the current aggregates using a
//! fixed priority order. The selection is a pure function of its inputs.

use tracing::debug;

use crate::models::{DailyBudgetStatus, MonthlyProgress, PositiveMessage, TodayStatus, WeeklyProgress};

/// Days of tracking needed before the weekly message is shown
pub const MIN_DAYS_FOR_WEEKLY_MESSAGE: u32 = 3;

/// Select the highest-priority message that applies, if any
///
/// Priority: monthly ahead, weekly ahead, saved today, rollover growing.
/// Streak messages are never produced here; see [`under_budget_streak`].
pub fn select_message(
    today: &TodayStatus,
    weekly: &WeeklyProgress,
    monthly: &MonthlyProgress,
) -> Option<PositiveMessage> {
    let message = if monthly.ahead_behind_amount > 0.0 {
        Some(PositiveMessage::monthly_ahead(monthly.ahead_behind_amount))
    } else if weekly.remaining > 0.0 && weekly.days_tracked >= MIN_DAYS_FOR_WEEKLY_MESSAGE {
        Some(PositiveMessage::weekly_ahead(weekly.remaining))
    } else if today.saved_today > 0.0 {
        Some(PositiveMessage::under_budget(today.saved_today))
    } else if today.rollover_from_yesterday > 0.0 {
        Some(PositiveMessage::rollover_growing(today.rollover_from_yesterday))
    } else {
        None
    };

    debug!(kind = ?message.as_ref().map(|m| m.kind), "selected positive message");
    message
}

/// Count consecutive days at or under the nominal limit, ending at the last
/// day of the ledger
pub fn under_budget_streak(ledger: &[DailyBudgetStatus]) -> u32 {
    ledger
        .iter()
        .rev()
        .take_while(|day| day.is_within_limit())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;
    use crate::services::ledger::build_ledger;
    use crate::models::DailySpendMap;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today(saved: f64, rollover: f64) -> TodayStatus {
        TodayStatus {
            date: date(2025, 5, 14),
            daily_limit: 50.0,
            spent: 50.0 - saved,
            remaining: saved,
            rollover_from_yesterday: rollover,
            effective_limit: 50.0 + rollover,
            is_over: saved < 0.0,
            saved_today: saved.max(0.0),
        }
    }

    fn weekly(remaining: f64, days_tracked: u32) -> WeeklyProgress {
        WeeklyProgress {
            week_start: date(2025, 5, 12),
            week_end: date(2025, 5, 18),
            total_budget: 50.0 * f64::from(days_tracked),
            total_spent: 50.0 * f64::from(days_tracked) - remaining,
            remaining,
            percent_used: 0.0,
            days_tracked,
            daily_breakdown: Vec::new(),
        }
    }

    fn monthly(ahead: f64) -> MonthlyProgress {
        MonthlyProgress {
            month_start: date(2025, 5, 1),
            month_end: date(2025, 5, 31),
            total_budget: 1550.0,
            total_spent: 700.0 - ahead,
            expected_spent_to_date: 700.0,
            ahead_behind_amount: ahead,
            projected_end_of_month: 1550.0,
            rollover_accumulated: 0.0,
            days_elapsed: 14,
            total_days: 31,
        }
    }

    #[test]
    fn test_monthly_beats_weekly() {
        let msg = select_message(&today(10.0, 5.0), &weekly(40.0, 5), &monthly(120.0)).unwrap();
        assert_eq!(msg.kind, MessageKind::MonthlyAhead);
        assert_eq!(msg.amount, Some(120.0));
    }

    #[test]
    fn test_weekly_needs_three_days() {
        let msg = select_message(&today(10.0, 0.0), &weekly(40.0, 2), &monthly(0.0)).unwrap();
        assert_eq!(msg.kind, MessageKind::UnderBudget);

        let msg = select_message(&today(10.0, 0.0), &weekly(40.0, 3), &monthly(0.0)).unwrap();
        assert_eq!(msg.kind, MessageKind::WeeklyAhead);
        assert_eq!(msg.amount, Some(40.0));
    }

    #[test]
    fn test_rollover_growing_when_over_today() {
        let msg = select_message(&today(-10.0, 25.0), &weekly(-5.0, 4), &monthly(-30.0)).unwrap();
        assert_eq!(msg.kind, MessageKind::RolloverGrowing);
        assert_eq!(msg.amount, Some(25.0));
    }

    #[test]
    fn test_no_message() {
        assert!(select_message(&today(-10.0, 0.0), &weekly(-5.0, 4), &monthly(-30.0)).is_none());
        assert!(select_message(&today(0.0, 0.0), &weekly(0.0, 7), &monthly(0.0)).is_none());
    }

    #[test]
    fn test_streak_counts_trailing_days() {
        let spend: DailySpendMap = [
            ("2025-05-01", 10.0),
            ("2025-05-02", 90.0),
            ("2025-05-03", 10.0),
            ("2025-05-04", 50.0),
        ]
        .into_iter()
        .collect();
        let ledger = build_ledger(&spend, 50.0, date(2025, 5, 1), date(2025, 5, 5));
        assert_eq!(under_budget_streak(&ledger), 3);
        assert_eq!(under_budget_streak(&ledger[..2]), 0);
        assert_eq!(under_budget_streak(&[]), 0);
    }
}
