//! Database bootstrap: create the database if missing, then open the pool.

use crate::error::{AppError, ConfigError};
use crate::sql::create_database;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const MAINTENANCE_DB: &str = "postgres";

/// Connect to `database_url`, creating the database first when it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let options = parse_url(database_url)?;
    ensure_database_exists(&options).await?;
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connection established successfully");
    Ok(pool)
}

pub fn parse_url(database_url: &str) -> Result<PgConnectOptions, ConfigError> {
    PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()))
}

/// Target database named by `options`, unless it is absent or the maintenance database.
fn target_database(options: &PgConnectOptions) -> Option<String> {
    options
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != MAINTENANCE_DB)
        .map(str::to_string)
}

/// Same host and credentials, pointed at the maintenance database.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let Some(name) = target_database(options) else {
        return Ok(());
    };
    let mut conn = options.clone().database(MAINTENANCE_DB).connect().await?;
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&name)
        .fetch_one(&mut conn)
        .await?;
    if !exists {
        tracing::info!(database = %name, "creating database");
        sqlx::query(&create_database(&name)).execute(&mut conn).await?;
    }
    Ok(())
}
