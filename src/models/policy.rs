//! Budget policy
//!
//! The per-call configuration the calculation services need. It is passed in
//! explicitly rather than read from settings inside the services.

use serde::{Deserialize, Serialize};

use super::calendar::DEFAULT_WEEK_STARTS_ON;

/// Daily limit and week convention used for one computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetPolicy {
    /// Nominal daily spending limit
    pub daily_limit: f64,
    /// First day of the week, 0 = Sunday .. 6 = Saturday
    pub week_starts_on: i32,
}

impl BudgetPolicy {
    pub fn new(daily_limit: f64, week_starts_on: i32) -> Self {
        Self {
            daily_limit,
            week_starts_on,
        }
    }

    /// Policy with the default Monday week start
    pub fn with_limit(daily_limit: f64) -> Self {
        Self::new(daily_limit, DEFAULT_WEEK_STARTS_ON)
    }
}
