//! Tagged Output - Delimiter schema and completion parsing
//!
//! This module defines the delimiter pairs a reasoning prompt prescribes
//! and the downstream parser that extracts the reasoning and answer spans
//! from a model completion.

mod parser;
mod schema;

pub use parser::{ParsedCompletion, extract_answer, extract_reasoning, is_compliant, parse_completion};
pub use schema::TagSchema;
