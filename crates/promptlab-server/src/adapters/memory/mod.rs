//! In-Memory Repository Implementations
//!
//! Process-local registries; nothing survives a restart.

mod collection_repository;
mod prompt_repository;
mod store;

pub use collection_repository::InMemoryCollectionRepository;
pub use prompt_repository::InMemoryPromptRepository;
pub use store::InMemoryStore;
