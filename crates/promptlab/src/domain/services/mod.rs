//! Domain Services
//!
//! Pure, side-effect-free functions over prompts.

mod listing;
mod template;

pub use listing::*;
pub use template::*;
