use std::{fs, path::Path};

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, error::Result};

/// Open the configured SQLite database and bring its schema up to date.
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection> {
    if !config.is_memory_database()
        && let Some(parent) = Path::new(config.database.trim()).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let url = config.database_url();
    let database = sea_orm::Database::connect(url.as_str()).await?;
    Migrator::up(&database, None).await?;
    tracing::info!(database = %config.database, "database ready");
    Ok(database)
}
