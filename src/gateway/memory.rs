//! In-process gateway. Ids start at 1 and are never reused.

use super::Gateway;
use crate::entity::Entity;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct Table<E> {
    next_id: i64,
    rows: BTreeMap<i64, E>,
}

pub struct MemoryGateway<E> {
    table: Mutex<Table<E>>,
}

impl<E> Default for MemoryGateway<E> {
    fn default() -> Self {
        MemoryGateway {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<E: Entity> MemoryGateway<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Table<E>> {
        // No critical section leaves a partial row, so poisoning is ignored.
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<E: Entity> Gateway<E> for MemoryGateway<E> {
    async fn create(&self, mut entity: E) -> Result<E, AppError> {
        let mut table = self.lock();
        let id = table.next_id;
        table.next_id += 1;
        entity.set_id(id);
        entity.normalize();
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<E, AppError> {
        Ok(self.lock().rows.get(&id).cloned().unwrap_or_default())
    }

    async fn update_fields(&self, id: i64, patch: E::Patch) -> Result<E, AppError> {
        let mut table = self.lock();
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.apply(patch);
                Ok(row.clone())
            }
            None => {
                let mut zero = E::default();
                zero.apply(patch);
                Ok(zero)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.lock().rows.remove(&id);
        Ok(())
    }
}
