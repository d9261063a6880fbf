//! PromptFilter - Criteria for listing prompts

use crate::domain::services::{filter_by_collection, search, sort_by_date};
use crate::domain::Prompt;

/// Listing criteria; empty strings count as "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilter {
    pub collection_id: Option<String>,
    pub search: Option<String>,
}

impl PromptFilter {
    pub fn new(collection_id: Option<String>, search: Option<String>) -> Self {
        Self {
            collection_id: collection_id.filter(|s| !s.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// Filter by collection, then search, then sort newest first
    pub fn apply(&self, prompts: Vec<Prompt>) -> Vec<Prompt> {
        let mut prompts = prompts;

        if let Some(collection_id) = &self.collection_id {
            prompts = filter_by_collection(prompts, collection_id);
        }

        if let Some(query) = &self.search {
            prompts = search(prompts, query);
        }

        sort_by_date(prompts, true)
    }
}
