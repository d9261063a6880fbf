//! In-memory implementation of CollectionRepository

use async_trait::async_trait;

use promptlab::{Collection, CollectionRepository, DomainError};

use super::InMemoryStore;

#[derive(Debug, Clone)]
pub struct InMemoryCollectionRepository {
    store: InMemoryStore,
}

impl InMemoryCollectionRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionRepository for InMemoryCollectionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Collection>, DomainError> {
        let registries = self.store.inner.read().await;
        Ok(registries.collections.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Collection>, DomainError> {
        let registries = self.store.inner.read().await;
        let mut collections: Vec<Collection> = registries.collections.values().cloned().collect();
        collections.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(collections)
    }

    async fn insert(&self, collection: &Collection) -> Result<Collection, DomainError> {
        let mut registries = self.store.inner.write().await;
        registries
            .collections
            .insert(collection.id.clone(), collection.clone());
        Ok(collection.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut registries = self.store.inner.write().await;
        Ok(registries.collections.remove(id).is_some())
    }
}
