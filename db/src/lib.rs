pub mod catalog;
pub mod models;
pub mod store;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Connects to the database named by `DATABASE_PATH`.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&config::database_path()).await
}

/// Connects to a DSN, or to a SQLite file path that is created on demand.
pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = database_url(path_or_url)?;
    tracing::debug!(%url, "connecting to database");
    Database::connect(&url).await
}

/// Turns `DATABASE_PATH` into a connection URL.
///
/// DSNs (see [`config::is_dsn`]) pass through unchanged. Anything else is a
/// SQLite file path: its parent directory is created (SQLite won't create
/// intermediate dirs) and the file is opened read-write-create.
pub fn database_url(path_or_url: &str) -> Result<String, DbErr> {
    if config::is_dsn(path_or_url) {
        return Ok(path_or_url.to_owned());
    }

    if let Some(parent) = Path::new(path_or_url).parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            tracing::warn!(dir = %parent.display(), error = %err, "failed to create DB directory");
            return Err(DbErr::Custom(format!(
                "failed to create DB directory {}: {err}",
                parent.display()
            )));
        }
    }
    Ok(format!("sqlite://{path_or_url}?mode=rwc"))
}
