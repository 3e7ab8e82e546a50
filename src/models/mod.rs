//! Core data models for daily-rollover
//!
//! Calendar helpers, the daily spend map, expense records and the value
//! records the budget services produce.

pub mod calendar;
pub mod expense;
pub mod message;
pub mod policy;
pub mod spend_map;
pub mod status;

pub use expense::Expense;
pub use message::{MessageKind, PositiveMessage};
pub use policy::BudgetPolicy;
pub use spend_map::DailySpendMap;
pub use status::{DailyBudgetStatus, MonthlyProgress, TodayStatus, WeeklyProgress};
