//! In-memory implementation of PromptRepository

use async_trait::async_trait;

use promptlab::{DomainError, Prompt, PromptRepository};

use super::InMemoryStore;

/// In-memory implementation of PromptRepository
#[derive(Debug, Clone)]
pub struct InMemoryPromptRepository {
    store: InMemoryStore,
}

impl InMemoryPromptRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        let registries = self.store.inner.read().await;
        Ok(registries.prompts.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        let registries = self.store.inner.read().await;
        let mut prompts: Vec<Prompt> = registries.prompts.values().cloned().collect();
        prompts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(prompts)
    }

    async fn find_by_collection(&self, collection_id: &str) -> Result<Vec<Prompt>, DomainError> {
        let registries = self.store.inner.read().await;
        let mut prompts: Vec<Prompt> = registries
            .prompts
            .values()
            .filter(|p| p.collection_id.as_deref() == Some(collection_id))
            .cloned()
            .collect();
        prompts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(prompts)
    }

    async fn insert(&self, prompt: &Prompt) -> Result<Prompt, DomainError> {
        let mut registries = self.store.inner.write().await;
        registries.prompts.insert(prompt.id.clone(), prompt.clone());
        Ok(prompt.clone())
    }

    async fn update(&self, id: &str, prompt: &Prompt) -> Result<Option<Prompt>, DomainError> {
        let mut registries = self.store.inner.write().await;
        match registries.prompts.get_mut(id) {
            Some(slot) => {
                *slot = prompt.clone();
                Ok(Some(prompt.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut registries = self.store.inner.write().await;
        Ok(registries.prompts.remove(id).is_some())
    }
}
