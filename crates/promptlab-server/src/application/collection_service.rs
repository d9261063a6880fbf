//! Collection Application Service (Use Case)
//!
//! Orchestrates domain operations for Collection management.

use std::sync::Arc;

use promptlab::{Collection, CollectionRepository, DomainError, PromptRepository};

use super::WriteLock;

/// Application service for Collection operations
pub struct CollectionService<P: PromptRepository, C: CollectionRepository> {
    prompts: Arc<P>,
    collections: Arc<C>,
    write_lock: WriteLock,
}

impl<P: PromptRepository, C: CollectionRepository> CollectionService<P, C> {
    pub fn new(prompts: Arc<P>, collections: Arc<C>, write_lock: WriteLock) -> Self {
        Self {
            prompts,
            collections,
            write_lock,
        }
    }

    /// List all collections
    pub async fn list(&self) -> Result<Vec<Collection>, DomainError> {
        self.collections.find_all().await
    }

    /// Get a collection by ID
    pub async fn get(&self, id: &str) -> Result<Collection, DomainError> {
        self.collections
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Collection", id))
    }

    /// Create a new collection
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Collection, DomainError> {
        let _guard = self.write_lock.lock().await;

        let collection = Collection::new(name, description);
        let saved = self.collections.insert(&collection).await?;

        tracing::info!("Created Collection: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Delete a collection, unlinking every prompt that references it
    ///
    /// Returns the number of prompts unlinked. Unlinking happens prompt by
    /// prompt before the collection is removed; it is not transactional.
    pub async fn delete(&self, id: &str) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;

        if self.collections.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Collection", id));
        }

        let linked = self.prompts.find_by_collection(id).await?;
        let unlinked = linked.len();
        for mut prompt in linked {
            prompt.unlink();
            self.prompts.update(&prompt.id, &prompt).await?;
        }

        self.collections.delete(id).await?;

        tracing::info!("Deleted Collection: {} (unlinked {} prompts)", id, unlinked);

        Ok(unlinked)
    }
}
