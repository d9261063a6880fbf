//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A foreign identifier supplied by the caller does not resolve
    #[error("Invalid reference: {entity_type} {id} does not exist")]
    InvalidReference { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend failure. Part of the repository port contract:
    /// the in-memory adapters never return it, other backends may.
    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_reference<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::InvalidReference {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}
