//! Shared in-memory registries for prompts and collections

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use promptlab::{Collection, Prompt};

use super::{InMemoryCollectionRepository, InMemoryPromptRepository};

#[derive(Debug, Default)]
pub(super) struct Registries {
    pub prompts: HashMap<String, Prompt>,
    pub collections: HashMap<String, Collection>,
}

/// Owner of both registries
///
/// Cloning is cheap and shares the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub(super) inner: Arc<RwLock<Registries>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt repository backed by this store
    pub fn prompts(&self) -> InMemoryPromptRepository {
        InMemoryPromptRepository::new(self.clone())
    }

    /// Collection repository backed by this store
    pub fn collections(&self) -> InMemoryCollectionRepository {
        InMemoryCollectionRepository::new(self.clone())
    }

    /// Wipe both registries
    #[cfg(test)]
    pub async fn clear(&self) {
        let mut registries = self.inner.write().await;
        registries.prompts.clear();
        registries.collections.clear();
    }
}
