use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use crate::{error::Result, reminder::Reminder};

const DEFAULT_CONFIG_PATH: &str = "config/billbook.toml";
const MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file path, or `:memory:`.
    pub database: String,
    pub currency_symbol: String,
    pub log_file: String,
    pub log_level: String,
    pub reminder: ReminderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: "data/bill_data.db".to_string(),
            currency_symbol: "¥".to_string(),
            log_file: "billbook.log".to_string(),
            log_level: "info".to_string(),
            reminder: ReminderConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn is_memory_database(&self) -> bool {
        self.database.trim() == MEMORY_DATABASE
    }

    pub fn database_url(&self) -> String {
        if self.is_memory_database() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}?mode=rwc", self.database.trim())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Arm the launch reminder at all.
    pub enabled: bool,
    pub delay_secs: u64,
    /// When false the reminder fires but nothing is shown or played.
    pub notifications: bool,
    pub title: String,
    pub body: String,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_secs: 15,
            notifications: true,
            title: "Reminder".to_string(),
            body: "Your reminder time is up!".to_string(),
        }
    }
}

impl ReminderConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn reminder(&self) -> Reminder {
        Reminder {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "billbook", version, about = "Track bills from the terminal")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the SQLite database path (`:memory:` for a throwaway store).
    #[arg(long)]
    database: Option<String>,
    /// Override the symbol shown in front of amounts.
    #[arg(long)]
    currency_symbol: Option<String>,
    /// Override the reminder delay in seconds.
    #[arg(long)]
    reminder_delay: Option<u64>,
    /// Do not arm the launch reminder.
    #[arg(long)]
    no_reminder: bool,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(
        config::Environment::with_prefix("BILLBOOK")
            .separator("__")
            .try_parsing(true),
    );
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(database) = args.database {
        settings.database = database;
    }
    if let Some(symbol) = args.currency_symbol {
        settings.currency_symbol = symbol;
    }
    if let Some(delay) = args.reminder_delay {
        settings.reminder.delay_secs = delay;
    }
    if args.no_reminder {
        settings.reminder.enabled = false;
    }

    Ok(settings)
}
