mod app;
mod config;
mod db;
mod error;
mod logging;
mod reminder;
mod ui;

use engine::Engine;
use tokio::sync::mpsc;

use crate::{
    error::Result,
    reminder::{ReminderScheduler, TerminalBell},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "billbook starting");

    let database = db::connect(&config).await?;
    let engine = Engine::builder().database(database).build()?;

    let (sender, receiver) = mpsc::unbounded_channel();
    if config.reminder.enabled {
        ReminderScheduler::new(config.reminder.delay()).arm(config.reminder.reminder(), sender);
    } else {
        tracing::info!("launch reminder disabled");
    }

    let mut app = app::App::new(engine, config, receiver, Box::new(TerminalBell));
    let result = app.run().await;
    if let Err(err) = &result {
        tracing::error!("billbook stopped: {err}");
    } else {
        tracing::info!("billbook closed");
    }
    result
}
