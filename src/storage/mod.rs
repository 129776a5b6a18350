//! Storage layer for Promptr - append-only completion logging.
//!
//! Parsed completions are appended to a JSONL file, one record per line,
//! for later inspection or use as a training signal.

mod jsonl;
mod records;

pub use jsonl::JsonlWriter;
pub use records::CompletionRecord;
