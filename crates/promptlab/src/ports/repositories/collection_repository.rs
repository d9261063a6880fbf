//! Collection Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Collection};

/// Repository interface for Collection entities
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Find a Collection by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Collection>, DomainError>;

    /// Find all Collections, in creation order
    async fn find_all(&self) -> Result<Vec<Collection>, DomainError>;

    /// Store a Collection; an existing record with the same ID is overwritten
    async fn insert(&self, collection: &Collection) -> Result<Collection, DomainError>;

    /// Delete a Collection by ID, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
