//! Tag schema - the delimiter pairs bounding reasoning and answer spans

use serde::{Deserialize, Serialize};

/// The two delimiter pairs a reasoning prompt prescribes
///
/// The default schema matches the builtin reasoning template: reasoning
/// inside `<think>`/`</think>` and the final answer inside
/// `<answer>`/`</answer>`. Alternate markers can be configured for
/// pipelines that train against a different convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSchema {
    /// Opening marker for the reasoning span
    pub think_open: String,
    /// Closing marker for the reasoning span
    pub think_close: String,
    /// Opening marker for the answer span
    pub answer_open: String,
    /// Closing marker for the answer span
    pub answer_close: String,
}

impl Default for TagSchema {
    fn default() -> Self {
        Self {
            think_open: "<think>".to_string(),
            think_close: "</think>".to_string(),
            answer_open: "<answer>".to_string(),
            answer_close: "</answer>".to_string(),
        }
    }
}

impl TagSchema {
    /// Create a schema with custom delimiter pairs
    pub fn new(
        think_open: impl Into<String>,
        think_close: impl Into<String>,
        answer_open: impl Into<String>,
        answer_close: impl Into<String>,
    ) -> Self {
        Self {
            think_open: think_open.into(),
            think_close: think_close.into(),
            answer_open: answer_open.into(),
            answer_close: answer_close.into(),
        }
    }

    /// Content of the first reasoning span in `text`, if one is closed
    pub fn think_span<'a>(&self, text: &'a str) -> Option<&'a str> {
        Self::span(text, &self.think_open, &self.think_close)
    }

    /// Content of the first answer span in `text`, if one is closed
    pub fn answer_span<'a>(&self, text: &'a str) -> Option<&'a str> {
        Self::span(text, &self.answer_open, &self.answer_close)
    }

    /// Number of times `marker` occurs in `text`
    pub fn occurrences(text: &str, marker: &str) -> usize {
        text.matches(marker).count()
    }

    /// Content between the first `open` marker and the next `close` marker
    fn span<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
        let start = text.find(open)? + open.len();
        let rest = &text[start..];
        let end = rest.find(close)?;
        Some(&rest[..end])
    }
}
