use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::debug;

use daily_rollover::cli::{
    handle_config_command, handle_expense_command, handle_report_command, ConfigCommands,
    ExpenseCommands, ReportCommands,
};
use daily_rollover::config::{paths::RolloverPaths, settings::Settings};
use daily_rollover::logging::init_tracing;
use daily_rollover::models::calendar::parse_date_key;
use daily_rollover::storage::Storage;

#[derive(Parser)]
#[command(
    name = "rollover",
    version,
    about = "Daily spending limit tracker with rollover",
    long_about = "rollover tracks spending against a daily limit. Unspent money \
                  rolls forward to the next day, overspending eats into what has \
                  been saved, and weekly and monthly views show how you are pacing."
)]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, env = "DAILY_ROLLOVER_TODAY")]
    today: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config directory and default settings
    Init,

    /// Settings management commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),
}

fn resolve_today(value: Option<&str>) -> Result<NaiveDate> {
    Ok(match value {
        Some(s) => parse_date_key(s)?,
        None => Local::now().date_naive(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = RolloverPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let today = resolve_today(cli.today.as_deref())?;
    debug!(%today, base_dir = %paths.base_dir().display(), "starting");

    match cli.command {
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized daily-rollover at: {}", paths.base_dir().display());
            println!(
                "Daily limit: {:.2} (change it with 'rollover config set-limit <amount>')",
                settings.daily_limit
            );
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;
            handle_expense_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;
            handle_report_command(&storage, &settings, today, cmd)?;
        }
        None => {
            println!("rollover - daily spending limit tracker");
            println!();
            println!("Run 'rollover --help' for usage information.");
            println!("Run 'rollover summary' to see how today is going.");
        }
    }

    Ok(())
}
