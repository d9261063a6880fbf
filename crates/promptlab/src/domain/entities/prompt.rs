//! Prompt - Text templates managed by PromptLab
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::next_timestamp;

/// Maximum prompt title length, in characters
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum description length for prompts and collections, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Prompt - A titled, content-bearing text template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    /// Weak reference to a Collection by id
    pub collection_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields of a prompt (create and full update)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
}

/// Partial update of a prompt
///
/// The outer `Option` of `description` and `collection_id` tells whether the
/// field was supplied at all; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<Option<String>>,
    pub collection_id: Option<Option<String>>,
}

impl Prompt {
    /// Create a new prompt with generated ID and equal timestamps
    pub fn new(draft: PromptDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            description: draft.description,
            collection_id: draft.collection_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-owned field, keeping id and created_at
    pub fn replace(&mut self, draft: PromptDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.description = draft.description;
        self.collection_id = draft.collection_id;
        self.touch();
    }

    /// Apply only the fields present in the patch
    pub fn apply(&mut self, patch: PromptPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(collection_id) = patch.collection_id {
            self.collection_id = collection_id;
        }
        self.touch();
    }

    /// Detach from its collection
    pub fn unlink(&mut self) {
        self.collection_id = None;
        self.touch();
    }

    /// Refresh updated_at; the new value is always strictly greater
    pub fn touch(&mut self) {
        self.updated_at = next_timestamp(self.updated_at);
    }
}

impl PromptPatch {
    /// Collection id that must be checked before applying this patch
    ///
    /// Only a non-null id that differs from `current` needs checking;
    /// keeping or clearing the current reference does not.
    pub fn collection_change(&self, current: Option<&str>) -> Option<&str> {
        match &self.collection_id {
            Some(Some(new)) if current != Some(new.as_str()) => Some(new.as_str()),
            _ => None,
        }
    }

    /// Content that will be written, if any
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}
