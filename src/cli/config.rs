//! Configuration CLI commands

use clap::Subcommand;

use crate::config::paths::RolloverPaths;
use crate::config::settings::Settings;
use crate::display::format_amount;
use crate::error::RolloverResult;
use crate::models::expense::parse_amount;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current settings and paths
    Show,

    /// Set the daily spending limit
    SetLimit {
        /// Amount (e.g., "50" or "50.00")
        amount: String,
    },

    /// Set the first day of the week (0 = Sunday .. 6 = Saturday)
    SetWeekStart {
        day: i32,
    },

    /// Set the currency symbol used in output
    SetCurrency {
        symbol: String,
    },
}

/// Name of a weekday index (0 = Sunday), reduced modulo 7
pub fn weekday_name(day: i32) -> &'static str {
    WEEKDAY_NAMES[day.rem_euclid(7) as usize]
}

/// Handle config commands
pub fn handle_config_command(
    paths: &RolloverPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> RolloverResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("daily-rollover Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Daily limit:    {}",
                format_amount(settings.daily_limit, &settings.currency_symbol)
            );
            println!("  Week starts on: {}", weekday_name(settings.week_starts_on));
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Import dates:   {}", settings.date_format);
            return Ok(());
        }
        ConfigCommands::SetLimit { amount } => {
            settings.set_daily_limit(parse_amount(&amount)?)?;
            println!(
                "Daily limit set to {}",
                format_amount(settings.daily_limit, &settings.currency_symbol)
            );
        }
        ConfigCommands::SetWeekStart { day } => {
            settings.set_week_starts_on(day)?;
            println!("Weeks now start on {}", weekday_name(day));
        }
        ConfigCommands::SetCurrency { symbol } => {
            println!("Currency symbol set to {}", symbol);
            settings.currency_symbol = symbol;
        }
    }

    settings.save(paths)
}
