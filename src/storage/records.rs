//! Completion record - what gets logged per model completion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_record_id;
use crate::tags::{TagSchema, extract_answer, extract_reasoning, is_compliant};

/// One logged completion with its extracted spans
///
/// `reasoning` and `answer` are extracted leniently, so a non-compliant
/// completion is still logged with whatever spans were recoverable and
/// `compliant` set to false.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub prompt: String,
    pub completion: String,
    pub reasoning: Option<String>,
    pub answer: Option<String>,
    pub compliant: bool,
}

impl CompletionRecord {
    /// Build a record from a prompt/completion pair, extracting spans per
    /// the given schema
    pub fn new(prompt: impl Into<String>, completion: impl Into<String>, schema: &TagSchema) -> Self {
        let completion = completion.into();
        Self {
            id: generate_record_id(),
            created_at: Utc::now(),
            prompt: prompt.into(),
            reasoning: extract_reasoning(&completion, schema),
            answer: extract_answer(&completion, schema),
            compliant: is_compliant(&completion, schema),
            completion,
        }
    }
}
