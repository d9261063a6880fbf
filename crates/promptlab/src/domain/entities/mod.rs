//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: A titled text template, optionally grouped
//! - Collection: A named grouping of prompts

mod collection;
mod prompt;

pub use collection::*;
pub use prompt::*;

use chrono::{DateTime, Duration, Utc};

/// Next modification timestamp, strictly after `previous`
pub(crate) fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
