//! Calendar key utilities
//!
//! Canonical `YYYY-MM-DD` date keys plus week and month boundary helpers.
//! Everything here works on calendar dates only; no time-of-day is involved.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{RolloverError, RolloverResult};

/// Format used for date keys in a spend map
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Default first day of the week (Monday)
pub const DEFAULT_WEEK_STARTS_ON: i32 = 1;

/// Canonical date key for a calendar date (`YYYY-MM-DD`)
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date key
pub fn parse_date_key(s: &str) -> RolloverResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT)
        .map_err(|_| RolloverError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Most recent occurrence of the `week_starts_on` weekday at or before `date`
///
/// `week_starts_on` uses 0 = Sunday .. 6 = Saturday. Any integer is accepted
/// and reduced modulo 7, so 7 behaves like 0 and -1 like 6.
pub fn week_start(date: NaiveDate, week_starts_on: i32) -> NaiveDate {
    let current = date.weekday().num_days_from_sunday() as i32;
    let target = week_starts_on.rem_euclid(7);
    let offset = (current - target).rem_euclid(7) as u64;
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the week containing `date` (six days after [`week_start`])
pub fn week_end(date: NaiveDate, week_starts_on: i32) -> NaiveDate {
    week_start(date, week_starts_on)
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX)
}

/// Normalise a year and zero-indexed month, rolling overflow into the year
///
/// Returns the calendar year and the one-based month number.
pub fn normalize_month(year: i32, month0: i32) -> (i32, u32) {
    let year = year.saturating_add(month0.div_euclid(12));
    let month = month0.rem_euclid(12) as u32 + 1;
    (year, month)
}

/// Year and zero-indexed month of a date
pub fn month_of(date: NaiveDate) -> (i32, i32) {
    (date.year(), date.month0() as i32)
}

/// First day of the given zero-indexed month
pub fn month_start(year: i32, month0: i32) -> NaiveDate {
    let (year, month) = normalize_month(year, month0);
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// Last day of the given zero-indexed month
pub fn month_end(year: i32, month0: i32) -> NaiveDate {
    month_start(year, month0)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Number of days in the given zero-indexed month
pub fn days_in_month(year: i32, month0: i32) -> u32 {
    let days = (month_end(year, month0) - month_start(year, month0)).num_days() + 1;
    days.max(0) as u32
}

/// Number of calendar days in `[start, end]`, zero when the range is inverted
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        0
    } else {
        ((end - start).num_days() + 1) as u32
    }
}
