//! daily-rollover - daily spending limit tracker with rollover
//!
//! The heart of this crate is a pure budget engine: given per-day spending
//! totals and a daily limit, it builds a day-by-day rollover ledger and
//! derives today's effective limit, weekly and monthly progress, a month-end
//! projection and a single encouraging message. The engine never reads the
//! clock, touches disk or formats currency; callers pass dates explicitly.
//!
//! # Architecture
//!
//! - `models`: calendar helpers, the daily spend map and value records
//! - `services`: the ledger builder, aggregators and message selector
//! - `config`: paths and user settings
//! - `storage`: JSON expense store
//! - `export`: ledger export (CSV, JSON, YAML)
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `rollover` binary
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_rollover::models::DailySpendMap;
//! use daily_rollover::services::{build_ledger, today_status};
//!
//! let spend: DailySpendMap = [("2025-03-01", 200.0), ("2025-03-02", 400.0)]
//!     .into_iter()
//!     .collect();
//! let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let third = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//!
//! let ledger = build_ledger(&spend, 300.0, first, third);
//! assert_eq!(ledger[1].rollover, 100.0);
//!
//! let today = today_status(&spend, 300.0, third);
//! assert_eq!(today.effective_limit, 300.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{RolloverError, RolloverResult};
