//! User settings for daily-rollover
//!
//! Holds the daily limit, week convention and display preferences. Settings
//! are read by the command layer and handed to the budget services as an
//! explicit [`BudgetPolicy`].

use serde::{Deserialize, Serialize};

use super::paths::RolloverPaths;
use crate::error::RolloverError;
use crate::models::calendar::DEFAULT_WEEK_STARTS_ON;
use crate::models::BudgetPolicy;

/// User settings for daily-rollover
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Nominal daily spending limit
    #[serde(default = "default_daily_limit")]
    pub daily_limit: f64,

    /// First day of week (0 = Sunday .. 6 = Saturday)
    #[serde(default = "default_week_starts_on")]
    pub week_starts_on: i32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for CSV import (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_daily_limit() -> f64 {
    50.0
}

fn default_week_starts_on() -> i32 {
    DEFAULT_WEEK_STARTS_ON
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            daily_limit: default_daily_limit(),
            week_starts_on: default_week_starts_on(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// The limit and week convention for budget calculations
    pub fn policy(&self) -> BudgetPolicy {
        BudgetPolicy::new(self.daily_limit, self.week_starts_on)
    }

    /// Set the daily limit, rejecting non-positive or non-finite values
    pub fn set_daily_limit(&mut self, limit: f64) -> Result<(), RolloverError> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(RolloverError::Validation(format!(
                "Daily limit must be a positive amount, got {}",
                limit
            )));
        }
        self.daily_limit = limit;
        Ok(())
    }

    /// Set the first day of the week (0 = Sunday .. 6 = Saturday)
    pub fn set_week_starts_on(&mut self, day: i32) -> Result<(), RolloverError> {
        if !(0..=6).contains(&day) {
            return Err(RolloverError::Validation(format!(
                "Week start must be between 0 (Sunday) and 6 (Saturday), got {}",
                day
            )));
        }
        self.week_starts_on = day;
        Ok(())
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &RolloverPaths) -> Result<Self, RolloverError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RolloverError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RolloverError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RolloverPaths) -> Result<(), RolloverError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RolloverError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            RolloverError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
