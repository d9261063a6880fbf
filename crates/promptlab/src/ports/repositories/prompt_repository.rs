//! Prompt Repository Port
//!
//! Abstract interface for Prompt storage operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Prompt};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find a Prompt by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError>;

    /// Find all Prompts, in creation order
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Find every Prompt referencing a collection
    async fn find_by_collection(&self, collection_id: &str) -> Result<Vec<Prompt>, DomainError>;

    /// Store a Prompt; an existing record with the same ID is overwritten
    async fn insert(&self, prompt: &Prompt) -> Result<Prompt, DomainError>;

    /// Replace an existing Prompt; `None` if `id` is unknown
    async fn update(&self, id: &str, prompt: &Prompt) -> Result<Option<Prompt>, DomainError>;

    /// Delete a Prompt by ID, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
