pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use util::config::DatabaseConfig;

/// Opens the single connection the seeder works on.
///
/// A bare SQLite path gets its parent directory created first, since SQLite
/// won't create intermediate directories.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let url = config.url().map_err(|e| DbErr::Custom(e.to_string()))?;

    if let Some(parent) = config.sqlite_path().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DbErr::Custom(e.to_string()))?;
        }
    }

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(false);

    log::debug!("connecting to {}@{}", config.database, config.host);
    Database::connect(options).await
}
