//! Startup DDL: make sure the entity's table exists.

use crate::entity::Entity;
use crate::error::AppError;
use crate::sql::create_table;
use sqlx::PgPool;

/// `CREATE TABLE IF NOT EXISTS` for `E`. Existing tables are not altered.
pub async fn ensure_table<E: Entity>(pool: &PgPool) -> Result<(), AppError> {
    let ddl = create_table(E::TABLE, E::COLUMNS);
    tracing::debug!(sql = %ddl, "ddl");
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = E::TABLE, "table ready");
    Ok(())
}
