//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between repositories.
//! Mutating use cases share one write lock so that existence checks and the
//! writes that depend on them are never interleaved.

mod collection_service;
mod prompt_service;

pub use collection_service::CollectionService;
pub use prompt_service::PromptService;

use std::sync::Arc;

use tokio::sync::Mutex;

/// Lock serializing every mutating use case
pub type WriteLock = Arc<Mutex<()>>;
