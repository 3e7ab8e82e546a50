//! Display formatting for terminal output
//!
//! Currency and percentage formatting belongs here, never in the budget
//! services.

pub mod expense;
pub mod progress;
pub mod report;

pub use expense::format_expense_list;
pub use progress::{
    format_ledger, format_message, format_monthly, format_snapshot, format_today, format_weekly,
};
pub use report::{format_amount, format_percentage};
