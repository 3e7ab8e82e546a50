//! Budget progress display formatting
//!
//! Renders today's status, weekly and monthly progress, the rollover ledger
//! and positive messages for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_amount, format_bar, format_percentage, separator};
use crate::models::{
    DailyBudgetStatus, MessageKind, MonthlyProgress, PositiveMessage, TodayStatus, WeeklyProgress,
};
use crate::services::BudgetSnapshot;

const BAR_WIDTH: usize = 20;
const RULE_WIDTH: usize = 40;

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Rollover")]
    rollover: String,
    #[tabled(rename = "Effective")]
    effective_limit: String,
}

/// Format today's status
pub fn format_today(status: &TodayStatus, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Today ({})\n", status.date));
    output.push_str(&format!("{}\n", separator(RULE_WIDTH)));
    output.push_str(&format!(
        "  Daily limit:      {:>12}\n",
        format_amount(status.daily_limit, symbol)
    ));
    output.push_str(&format!(
        "  Rollover:         {:>12}\n",
        format_amount(status.rollover_from_yesterday, symbol)
    ));
    output.push_str(&format!(
        "  Effective limit:  {:>12}\n",
        format_amount(status.effective_limit, symbol)
    ));
    output.push_str(&format!(
        "  Spent:            {:>12}\n",
        format_amount(status.spent, symbol)
    ));
    output.push_str(&format!(
        "  Remaining:        {:>12}\n",
        format_amount(status.remaining, symbol)
    ));

    if status.is_over {
        output.push_str(&format!(
            "\n  Over today's limit by {}\n",
            format_amount(-status.remaining, symbol)
        ));
    }

    output
}

/// Format weekly progress
pub fn format_weekly(progress: &WeeklyProgress, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Week {} to {} ({} of 7 days tracked)\n",
        progress.week_start, progress.week_end, progress.days_tracked
    ));
    output.push_str(&format!("{}\n", separator(RULE_WIDTH)));
    output.push_str(&format!(
        "  Budget:     {:>12}\n",
        format_amount(progress.total_budget, symbol)
    ));
    output.push_str(&format!(
        "  Spent:      {:>12}\n",
        format_amount(progress.total_spent, symbol)
    ));
    output.push_str(&format!(
        "  Remaining:  {:>12}\n",
        format_amount(progress.remaining, symbol)
    ));
    output.push_str(&format!(
        "  {} {}\n",
        format_bar(progress.total_spent, progress.total_budget, BAR_WIDTH),
        format_percentage(progress.percent_used)
    ));
    output
}

/// Format monthly progress and projection
pub fn format_monthly(progress: &MonthlyProgress, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Month of {} (day {} of {})\n",
        progress.month_start.format("%B %Y"),
        progress.days_elapsed,
        progress.total_days
    ));
    output.push_str(&format!("{}\n", separator(RULE_WIDTH)));
    output.push_str(&format!(
        "  Monthly budget:   {:>12}\n",
        format_amount(progress.total_budget, symbol)
    ));
    output.push_str(&format!(
        "  Spent so far:     {:>12}\n",
        format_amount(progress.total_spent, symbol)
    ));
    output.push_str(&format!(
        "  On-pace target:   {:>12}\n",
        format_amount(progress.expected_spent_to_date, symbol)
    ));

    let pace = if progress.is_ahead() {
        "ahead"
    } else if progress.ahead_behind_amount < 0.0 {
        "behind"
    } else {
        "on pace"
    };
    output.push_str(&format!(
        "  {:<17} {:>12}\n",
        format!("Pace ({}):", pace),
        format_amount(progress.ahead_behind_amount.abs(), symbol)
    ));
    output.push_str(&format!(
        "  Projected total:  {:>12}\n",
        format_amount(progress.projected_end_of_month, symbol)
    ));
    output.push_str(&format!(
        "  Rollover:         {:>12}\n",
        format_amount(progress.rollover_accumulated, symbol)
    ));
    output
}

/// Format a ledger as a table
pub fn format_ledger(ledger: &[DailyBudgetStatus], symbol: &str) -> String {
    if ledger.is_empty() {
        return "No days in range.".to_string();
    }

    let rows = ledger.iter().map(|day| LedgerRow {
        date: day.date.to_string(),
        limit: format_amount(day.limit, symbol),
        spent: format_amount(day.spent, symbol),
        remaining: format_amount(day.remaining, symbol),
        rollover: format_amount(day.rollover, symbol),
        effective_limit: format_amount(day.effective_limit, symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a positive message, or nothing when there is none
pub fn format_message(message: Option<&PositiveMessage>, symbol: &str) -> String {
    let Some(message) = message else {
        return String::new();
    };

    match (message.kind, message.amount) {
        (MessageKind::Streak, Some(days)) => {
            format!("★ {} ({} days)", message.message, days as u32)
        }
        (_, Some(amount)) => format!("★ {} ({})", message.message, format_amount(amount, symbol)),
        (_, None) => format!("★ {}", message.message),
    }
}

/// Format a full snapshot: message, today, week and month
pub fn format_snapshot(snapshot: &BudgetSnapshot, symbol: &str) -> String {
    let mut output = String::new();

    let message = format_message(snapshot.message.as_ref(), symbol);
    if !message.is_empty() {
        output.push_str(&message);
        output.push_str("\n\n");
    }

    output.push_str(&format_today(&snapshot.today, symbol));
    output.push('\n');
    output.push_str(&format_weekly(&snapshot.weekly, symbol));
    output.push('\n');
    output.push_str(&format_monthly(&snapshot.monthly, symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailySpendMap;
    use crate::services::{build_ledger, monthly_progress, today_status};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_today_over_limit() {
        let spend: DailySpendMap = [("2025-03-01", 80.0)].into_iter().collect();
        let status = today_status(&spend, 50.0, date(2025, 3, 1));
        let output = format_today(&status, "$");
        assert!(output.contains("$50.00"));
        assert!(output.contains("Over today's limit by $30.00"));
    }

    #[test]
    fn test_format_ledger_table() {
        let spend: DailySpendMap = [("2025-03-01", 20.0)].into_iter().collect();
        let ledger = build_ledger(&spend, 50.0, date(2025, 3, 1), date(2025, 3, 2));
        let output = format_ledger(&ledger, "$");
        assert!(output.contains("Rollover"));
        assert!(output.contains("2025-03-02"));
        assert!(output.contains("$80.00"));
    }

    #[test]
    fn test_format_empty_ledger() {
        assert_eq!(format_ledger(&[], "$"), "No days in range.");
    }

    #[test]
    fn test_format_message() {
        assert_eq!(format_message(None, "$"), "");

        let msg = PositiveMessage::under_budget(12.0);
        assert!(format_message(Some(&msg), "$").ends_with("($12.00)"));

        let streak = PositiveMessage::streak(5);
        assert!(format_message(Some(&streak), "$").ends_with("(5 days)"));
    }

    #[test]
    fn test_format_monthly_pace_label() {
        let pace = |spent: f64| {
            let spend: DailySpendMap = [("2025-03-01", spent)].into_iter().collect();
            format_monthly(&monthly_progress(&spend, 50.0, 2025, 2, date(2025, 3, 2)), "$")
        };

        assert!(pace(20.0).contains("Pace (ahead):"));
        assert!(pace(20.0).contains("$80.00"));
        assert!(pace(200.0).contains("Pace (behind):"));
        assert!(pace(100.0).contains("Pace (on pace):"));
    }
}
