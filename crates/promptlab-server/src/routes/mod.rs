//! PromptLab API Routes
//!
//! - /health - Liveness probe
//! - /prompts - Prompt management
//! - /collections - Collection management

pub mod collection;
pub mod health;
pub mod prompt;
pub mod swagger;

#[cfg(test)]
mod tests;
