//! Positive messages
//!
//! Encouraging notes shown alongside budget progress. Message text carries no
//! currency formatting; the amount travels separately for the caller to format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of positive message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Spent less than today's limit
    UnderBudget,
    /// Several consecutive days within the limit
    Streak,
    /// Under budget for the week so far
    WeeklyAhead,
    /// Under the on-pace baseline for the month
    MonthlyAhead,
    /// Carrying rollover into today
    RolloverGrowing,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnderBudget => "under_budget",
            Self::Streak => "streak",
            Self::WeeklyAhead => "weekly_ahead",
            Self::MonthlyAhead => "monthly_ahead",
            Self::RolloverGrowing => "rollover_growing",
        };
        f.write_str(name)
    }
}

/// A single encouraging message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositiveMessage {
    pub kind: MessageKind,
    pub message: String,
    /// Money amount, or a day count for [`MessageKind::Streak`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl PositiveMessage {
    fn new(kind: MessageKind, message: &str, amount: f64) -> Self {
        Self {
            kind,
            message: message.to_string(),
            amount: Some(amount),
        }
    }

    pub fn monthly_ahead(amount: f64) -> Self {
        Self::new(
            MessageKind::MonthlyAhead,
            "You're ahead of pace this month. Keep it up!",
            amount,
        )
    }

    pub fn weekly_ahead(amount: f64) -> Self {
        Self::new(
            MessageKind::WeeklyAhead,
            "You're under budget for the week so far.",
            amount,
        )
    }

    pub fn under_budget(amount: f64) -> Self {
        Self::new(
            MessageKind::UnderBudget,
            "Nice! You've saved money today.",
            amount,
        )
    }

    pub fn rollover_growing(amount: f64) -> Self {
        Self::new(
            MessageKind::RolloverGrowing,
            "Your rollover is growing. Yesterday's savings carry into today.",
            amount,
        )
    }

    pub fn streak(days: u32) -> Self {
        Self::new(
            MessageKind::Streak,
            "You've stayed within your limit day after day.",
            f64::from(days),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&MessageKind::RolloverGrowing).unwrap();
        assert_eq!(json, "\"rollover_growing\"");
        assert_eq!(MessageKind::WeeklyAhead.to_string(), "weekly_ahead");
    }

    #[test]
    fn test_streak_carries_day_count() {
        let msg = PositiveMessage::streak(4);
        assert_eq!(msg.kind, MessageKind::Streak);
        assert_eq!(msg.amount, Some(4.0));
    }

    #[test]
    fn test_message_text_has_no_currency() {
        let msg = PositiveMessage::monthly_ahead(120.0);
        assert!(!msg.message.contains('$'));
        assert!(!msg.message.contains("120"));
    }
}
