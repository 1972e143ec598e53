//! Persistence gateway: the only way handlers reach the store.

mod memory;
mod postgres;

pub use memory::MemoryGateway;
pub use postgres::PgGateway;

use crate::entity::Entity;
use crate::error::AppError;
use async_trait::async_trait;

/// CRUD over one entity type. Missing ids are never an error: reads return
/// `E::default()`, deletes are no-ops.
#[async_trait]
pub trait Gateway<E: Entity>: Send + Sync {
    /// Persist `entity`; the returned copy carries the assigned id.
    async fn create(&self, entity: E) -> Result<E, AppError>;

    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<E, AppError>;

    /// Merge `patch` onto the stored record and persist it. When `id` does not
    /// exist, returns the patch applied to `E::default()` and writes nothing.
    async fn update_fields(&self, id: i64, patch: E::Patch) -> Result<E, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
