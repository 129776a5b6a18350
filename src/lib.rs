//! Promptr - reasoning prompt asset and tagged-output tooling
//!
//! Promptr holds the fixed reasoning prompt template a fine-tuning or
//! serving pipeline supplies to a model, plus the downstream plumbing for
//! the format it prescribes: extracting think/answer spans from
//! completions, validating compliance, and logging parsed completions to
//! JSONL.

pub mod error;
pub mod id;
pub mod prompt;
pub mod storage;
pub mod tags;
pub mod validation;

pub use error::{PromptrError, Result};
