//! In-memory entity store

use super::traits::EntityStore;
use crate::domain::{ClinicError, Entity, Result, ValidationResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// [`EntityStore`] backed by a `HashMap` behind a tokio `RwLock`
///
/// Readers share the lock; `insert`, `update` and `remove` take it exclusively,
/// which serializes every write to a given aggregate.
pub struct InMemoryStore<E: Entity> {
    entities: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn insert(&self, entity: E) -> Result<()> {
        let id = entity.id();
        let mut entities = self.entities.write().await;
        if entities.contains_key(&id) {
            return Err(ClinicError::Conflict(format!(
                "{} {} already exists",
                E::KIND,
                id
            )));
        }
        entities.insert(id, entity);
        tracing::debug!(kind = E::KIND, id = %id, "Entity stored");
        Ok(())
    }

    async fn get(&self, id: E::Id) -> Result<Option<E>> {
        Ok(self.entities.read().await.get(&id).cloned())
    }

    async fn update<F>(&self, id: E::Id, mutation: F) -> Result<E>
    where
        F: FnOnce(&mut E) -> ValidationResult<()> + Send,
    {
        let mut entities = self.entities.write().await;
        let mut working = entities
            .get(&id)
            .cloned()
            .ok_or_else(|| ClinicError::NotFound(format!("{} {}", E::KIND, id)))?;

        if let Err(e) = mutation(&mut working) {
            crate::log_validation_failure!(E::KIND, id, e);
            return Err(e.into());
        }

        entities.insert(id, working.clone());
        tracing::debug!(kind = E::KIND, id = %id, "Entity updated");
        Ok(working)
    }

    async fn remove(&self, id: E::Id) -> Result<bool> {
        let removed = self.entities.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(kind = E::KIND, id = %id, "Entity removed");
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<E>> {
        Ok(self.entities.read().await.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.entities.read().await.len())
    }
}
