//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can be in-memory, SQLite, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for an append-only collection
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Append a new entity at the end of the collection
    async fn append(&self, entity: T) -> DomainResult<T>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;
}

/// Extension for repositories whose entities carry a completion flag
#[async_trait]
pub trait ToggleRepository<T: Entity>: Repository<T> {
    /// Flip the completion flag of one entity.
    ///
    /// Returns the updated entity, or `None` when the key does not address
    /// anything (which is not an error).
    async fn toggle_at(&self, id: T::Id) -> DomainResult<Option<T>>;
}
