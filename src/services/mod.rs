//! Budget calculation services
//!
//! The rollover ledger and everything built on it: weekly and monthly
//! progress, today's status and positive messages. These are pure functions
//! of a spend map, a limit and explicit dates. CSV import is the one
//! service that touches storage.

pub mod import;
pub mod ledger;
pub mod messages;
pub mod monthly;
pub mod snapshot;
pub mod today;
pub mod weekly;

pub use import::{ImportMapping, ImportResult, ImportService, ParsedRow};
pub use ledger::{build_ledger, carry_forward, closing_rollover};
pub use messages::{select_message, under_budget_streak};
pub use monthly::monthly_progress;
pub use snapshot::BudgetSnapshot;
pub use today::today_status;
pub use weekly::weekly_progress;
