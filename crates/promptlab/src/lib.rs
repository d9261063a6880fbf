//! PromptLab Domain Library
//!
//! Core domain types and interfaces for the PromptLab prompt manager.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Prompt and Collection records
//!   - `services/`: Pure functions over prompt sequences (filter, search, sort, templates)
//!   - `value_objects/`: Immutable query types (PromptFilter)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptlab::domain::{Prompt, PromptDraft, PromptFilter};
//! use promptlab::ports::{CollectionRepository, PromptRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Collection, DomainError, Prompt, PromptDraft, PromptFilter, PromptPatch,
};
pub use ports::{CollectionRepository, PromptRepository};
