// SQLite pool bootstrap

use crate::core::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id    TEXT PRIMARY KEY NOT NULL,
    name  TEXT NOT NULL,
    email TEXT NOT NULL
)";

/// Open the database pool and make sure the schema exists.
///
/// The database file is created on first run.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    info!(
        url = %config.url,
        max_connections = config.max_connections,
        "Database ready"
    );

    Ok(pool)
}

/// Create the `users` table if it is missing. Idempotent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    Ok(())
}
