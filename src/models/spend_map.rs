//! Daily spend map
//!
//! Per-day spending totals keyed by `YYYY-MM-DD`. A missing key means
//! nothing was spent that day.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::date_key;
use super::expense::Expense;

/// Mapping from date key to the total amount spent on that day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySpendMap(HashMap<String, f64>);

impl DailySpendMap {
    /// Create an empty spend map
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce expenses to per-day totals, keeping only days in `[start, end]`
    pub fn from_expenses<'a, I>(expenses: I, start: NaiveDate, end: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut map = Self::new();
        for expense in expenses {
            if expense.date >= start && expense.date <= end {
                map.add(expense.date, expense.amount);
            }
        }
        map
    }

    /// Add an amount to the running total for a date
    pub fn add(&mut self, date: NaiveDate, amount: f64) {
        *self.0.entry(date_key(date)).or_insert(0.0) += amount;
    }

    /// Total spent on a date (zero when absent)
    pub fn spent_on(&self, date: NaiveDate) -> f64 {
        self.get(&date_key(date))
    }

    /// Total recorded under a raw date key (zero when absent)
    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    /// Number of days with an entry
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for DailySpendMap {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
