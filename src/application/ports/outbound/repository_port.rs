//! Repository port - Interface for asset persistence
//!
//! One generic contract serves every resource. Implementations report
//! failures as [`StoreError`], already tagged with their kind; callers never
//! inspect backend-specific error text.

use async_trait::async_trait;

use crate::application::dto::Filter;
use crate::application::errors::StoreError;
use crate::application::resource::Resource;

#[async_trait]
pub trait AssetRepositoryPort<A: Resource>: Send + Sync {
    /// List assets matching the filter scope, windowed by its page
    async fn list(&self, filter: &Filter<A::Scope>) -> Result<Vec<A>, StoreError>;

    /// Get an asset by ID
    async fn get(&self, id: A::Id) -> Result<A, StoreError>;

    /// Create a new asset
    async fn create(&self, change: A::Change) -> Result<A, StoreError>;

    /// Replace an existing asset's fields
    async fn update(&self, id: A::Id, change: A::Change) -> Result<A, StoreError>;

    /// Delete an asset
    async fn remove(&self, id: A::Id) -> Result<(), StoreError>;
}
