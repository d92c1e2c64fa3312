//! Storage abstraction traits
//!
//! This module defines the trait every storage backend implements to hold
//! domain entities.

use crate::domain::{Entity, Result, ValidationResult};
use async_trait::async_trait;

/// Storage for one kind of entity, keyed by identifier
///
/// Implementations must serialize writers per aggregate: [`update`](Self::update)
/// is the only way to mutate a stored entity and runs under exclusive access.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Stores a new entity
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::Conflict` if an entity with the same identifier is
    /// already stored.
    async fn insert(&self, entity: E) -> Result<()>;

    /// Returns a copy of the stored entity
    async fn get(&self, id: E::Id) -> Result<Option<E>>;

    /// Applies `mutation` to the stored entity as a single writer
    ///
    /// The mutation runs on a working copy. The copy replaces the stored entity
    /// only if the mutation returns `Ok`, so a failing step leaves storage
    /// untouched even when earlier steps succeeded.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::NotFound` for an unknown identifier and
    /// `ClinicError::Validation` when the mutation is rejected.
    async fn update<F>(&self, id: E::Id, mutation: F) -> Result<E>
    where
        F: FnOnce(&mut E) -> ValidationResult<()> + Send;

    /// Removes an entity, returning whether it was present
    async fn remove(&self, id: E::Id) -> Result<bool>;

    /// Copies of every stored entity, in no particular order
    async fn list(&self) -> Result<Vec<E>>;

    /// Number of stored entities
    async fn count(&self) -> Result<usize>;
}
