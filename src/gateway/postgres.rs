//! PostgreSQL gateway: statements built from the entity descriptor, rows decoded with `FromRow`.

use super::Gateway;
use crate::entity::Entity;
use crate::error::AppError;
use crate::sql::{self, id_argument, to_arguments};
use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;

pub struct PgGateway<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PgGateway<E> {
    pub fn new(pool: PgPool) -> Self {
        PgGateway {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl<E: Entity> Gateway<E> for PgGateway<E> {
    async fn create(&self, entity: E) -> Result<E, AppError> {
        let sql = sql::insert(E::TABLE, E::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let args = to_arguments(entity.values(), None)?;
        let row = sqlx::query_as_with::<_, E, _>(&sql, args)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        let sql = sql::select_all(E::TABLE, E::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<E, AppError> {
        let sql = sql::select_by_id(E::TABLE, E::COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as_with::<_, E, _>(&sql, id_argument(id)?)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.unwrap_or_default())
    }

    async fn update_fields(&self, id: i64, patch: E::Patch) -> Result<E, AppError> {
        let sql = sql::update_fields(E::TABLE, E::COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let args = to_arguments(E::patch_values(&patch), Some(id))?;
        let row = sqlx::query_as_with::<_, E, _>(&sql, args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.unwrap_or_else(|| {
            let mut zero = E::default();
            zero.apply(patch);
            zero
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let sql = sql::delete_by_id(E::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query_with(&sql, id_argument(id)?).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            tracing::debug!(table = E::TABLE, id, "delete matched no row");
        }
        Ok(())
    }
}
