//! Expense records
//!
//! A single dated spend. Expenses live outside the calculation core; they are
//! reduced to a [`DailySpendMap`](super::DailySpendMap) before any budget
//! figures are computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RolloverError, RolloverResult};

/// A dated expense amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: Uuid,

    /// Calendar day the money was spent
    pub date: NaiveDate,

    /// Amount spent (non-negative)
    pub amount: f64,

    /// Free-form note
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(date: NaiveDate, amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            description: description.into(),
        }
    }

    /// Check the amount is a finite, non-negative number
    pub fn validate(&self) -> RolloverResult<()> {
        if !self.amount.is_finite() {
            return Err(RolloverError::Validation(format!(
                "Expense amount must be a number, got {}",
                self.amount
            )));
        }
        if self.amount < 0.0 {
            return Err(RolloverError::Validation(format!(
                "Expense amount cannot be negative: {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Parse a user-entered amount such as "12.50", "$12.50" or "1,200"
pub fn parse_amount(s: &str) -> RolloverResult<f64> {
    let trimmed = s.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };
    let cleaned: String = rest
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| RolloverError::Validation(format!("Invalid amount: {}", s)))?;
    if !value.is_finite() {
        return Err(RolloverError::Validation(format!("Invalid amount: {}", s)));
    }

    Ok(if negative { -value } else { value })
}
