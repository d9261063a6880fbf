//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod prompt_filter;

pub use prompt_filter::*;
