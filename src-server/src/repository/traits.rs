//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Append-only repository for entities created from a validated draft
///
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Validated input accepted by `create`
    type Draft: Send + 'static;

    /// Store a new entity, returning it with its assigned ID
    async fn create(&self, draft: Self::Draft) -> DomainResult<T>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Number of stored entities
    async fn count(&self) -> DomainResult<usize>;
}
