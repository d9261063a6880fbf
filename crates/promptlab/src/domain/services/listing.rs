//! Prompt listing helpers: collection filter, text search, date sort

use crate::domain::Prompt;

/// Keep prompts whose collection_id equals `collection_id`
pub fn filter_by_collection(prompts: Vec<Prompt>, collection_id: &str) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| p.collection_id.as_deref() == Some(collection_id))
        .collect()
}

/// Case-insensitive substring search over title and description
///
/// Content is not searched.
pub fn search(prompts: Vec<Prompt>, query: &str) -> Vec<Prompt> {
    let needle = query.to_lowercase();
    prompts
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort by created_at; `descending` puts the newest first
///
/// The sort is stable, so prompts sharing a timestamp keep their input order.
pub fn sort_by_date(mut prompts: Vec<Prompt>, descending: bool) -> Vec<Prompt> {
    if descending {
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    } else {
        prompts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    }
    prompts
}
