//! Prompt request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use promptlab::{Prompt, PromptDraft, PromptFilter, PromptPatch};

use super::validation::non_empty;

// ============================================
// Request DTOs
// ============================================

/// Create (POST) or fully replace (PUT) a prompt
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePromptRequest {
    /// 1-200 characters
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    /// At least 1 character
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    /// Up to 500 characters
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    /// Must reference an existing collection
    pub collection_id: Option<String>,
}

impl CreatePromptRequest {
    pub fn into_draft(self) -> PromptDraft {
        PromptDraft {
            title: self.title,
            content: self.content,
            description: self.description,
            collection_id: non_empty(self.collection_id),
        }
    }
}

/// Partially update a prompt (PATCH)
///
/// Omitted fields are left alone; `null` clears `description` or
/// `collection_id`. An empty `collection_id` counts as omitted.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct PatchPromptRequest {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub collection_id: Option<Option<String>>,
}

impl PatchPromptRequest {
    pub fn into_patch(self) -> PromptPatch {
        PromptPatch {
            title: self.title,
            content: self.content,
            description: self.description,
            collection_id: self.collection_id.filter(|c| c.as_deref() != Some("")),
        }
    }
}

/// Query parameters for listing prompts
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPromptsQuery {
    /// Only prompts in this collection
    pub collection_id: Option<String>,
    /// Case-insensitive match on title or description
    pub search: Option<String>,
}

impl ListPromptsQuery {
    pub fn into_filter(self) -> PromptFilter {
        PromptFilter::new(self.collection_id, self.search)
    }
}

// ============================================
// Response DTOs
// ============================================

/// Prompt record
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            content: prompt.content,
            description: prompt.description,
            collection_id: prompt.collection_id,
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}

/// Prompt list, newest first
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptListResponse {
    pub prompts: Vec<PromptResponse>,
    /// Number of prompts after filtering
    pub total: usize,
}

impl From<Vec<Prompt>> for PromptListResponse {
    fn from(prompts: Vec<Prompt>) -> Self {
        let prompts: Vec<PromptResponse> = prompts.into_iter().map(Into::into).collect();
        Self {
            total: prompts.len(),
            prompts,
        }
    }
}

/// Template variables found in a prompt's content
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptVariablesResponse {
    pub prompt_id: String,
    /// In order of appearance, duplicates kept
    pub variables: Vec<String>,
}
