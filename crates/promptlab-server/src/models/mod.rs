//! PromptLab HTTP Models
//!
//! - Prompt: request/response DTOs for prompt endpoints
//! - Collection: request/response DTOs for collection endpoints
//! - Health: liveness probe
//! - Validation: maps validator errors to the 422 body

mod collection;
mod health;
mod prompt;
mod validation;

pub use collection::*;
pub use health::*;
pub use prompt::*;
pub use validation::*;
