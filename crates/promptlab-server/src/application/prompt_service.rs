//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for Prompt management.

use std::sync::Arc;

use promptlab::domain::services::{extract_variables, validate_content, MIN_CONTENT_CHARS};
use promptlab::{
    CollectionRepository, DomainError, Prompt, PromptDraft, PromptFilter, PromptPatch,
    PromptRepository,
};

use super::WriteLock;

/// Application service for Prompt operations
pub struct PromptService<P: PromptRepository, C: CollectionRepository> {
    prompts: Arc<P>,
    collections: Arc<C>,
    write_lock: WriteLock,
    strict_content: bool,
}

impl<P: PromptRepository, C: CollectionRepository> PromptService<P, C> {
    pub fn new(prompts: Arc<P>, collections: Arc<C>, write_lock: WriteLock) -> Self {
        Self {
            prompts,
            collections,
            write_lock,
            strict_content: false,
        }
    }

    /// Enforce the minimum content length on every write
    pub fn with_strict_content(mut self, strict_content: bool) -> Self {
        self.strict_content = strict_content;
        self
    }

    /// List prompts matching the filter, newest first
    pub async fn list(&self, filter: &PromptFilter) -> Result<Vec<Prompt>, DomainError> {
        let prompts = self.prompts.find_all().await?;
        let matched = filter.apply(prompts);
        tracing::debug!("Listed {} prompts ({:?})", matched.len(), filter);
        Ok(matched)
    }

    /// Get a prompt by ID
    pub async fn get(&self, id: &str) -> Result<Prompt, DomainError> {
        self.prompts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// Create a new prompt
    pub async fn create(&self, draft: PromptDraft) -> Result<Prompt, DomainError> {
        self.check_content(&draft.content)?;

        let _guard = self.write_lock.lock().await;

        if let Some(collection_id) = draft.collection_id.as_deref() {
            self.ensure_collection(collection_id).await?;
        }

        let prompt = Prompt::new(draft);
        let saved = self.prompts.insert(&prompt).await?;

        tracing::info!("Created Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Replace every caller-owned field of a prompt
    pub async fn replace(&self, id: &str, draft: PromptDraft) -> Result<Prompt, DomainError> {
        self.check_content(&draft.content)?;

        let _guard = self.write_lock.lock().await;

        let mut prompt = self.get(id).await?;

        if let Some(collection_id) = draft.collection_id.as_deref() {
            self.ensure_collection(collection_id).await?;
        }

        prompt.replace(draft);
        let saved = self
            .prompts
            .update(id, &prompt)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::info!("Updated Prompt: {}", id);

        Ok(saved)
    }

    /// Apply a partial update
    ///
    /// The collection reference is only re-checked when the patch sets a
    /// different, non-null collection.
    pub async fn patch(&self, id: &str, patch: PromptPatch) -> Result<Prompt, DomainError> {
        if let Some(content) = patch.content() {
            self.check_content(content)?;
        }

        let _guard = self.write_lock.lock().await;

        let mut prompt = self.get(id).await?;

        if let Some(collection_id) = patch.collection_change(prompt.collection_id.as_deref()) {
            self.ensure_collection(collection_id).await?;
        }

        prompt.apply(patch);
        let saved = self
            .prompts
            .update(id, &prompt)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::info!("Patched Prompt: {}", id);

        Ok(saved)
    }

    /// Delete a prompt permanently
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        if !self.prompts.delete(id).await? {
            return Err(DomainError::not_found("Prompt", id));
        }

        tracing::info!("Deleted Prompt: {}", id);
        Ok(())
    }

    /// Template variables used in a prompt's content
    pub async fn variables(&self, id: &str) -> Result<Vec<String>, DomainError> {
        let prompt = self.get(id).await?;
        Ok(extract_variables(&prompt.content))
    }

    async fn ensure_collection(&self, collection_id: &str) -> Result<(), DomainError> {
        if self.collections.find_by_id(collection_id).await?.is_none() {
            tracing::warn!("Rejected unknown collection reference: {}", collection_id);
            return Err(DomainError::invalid_reference("Collection", collection_id));
        }
        Ok(())
    }

    fn check_content(&self, content: &str) -> Result<(), DomainError> {
        if self.strict_content && !validate_content(content) {
            return Err(DomainError::Validation(format!(
                "content must contain at least {} non-blank characters",
                MIN_CONTENT_CHARS
            )));
        }
        Ok(())
    }
}
