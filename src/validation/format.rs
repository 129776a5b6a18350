// Validation System - Tag Format Validator
// Checks that a completion transcript follows the prescribed delimiter format

use crate::error::Result;
use crate::tags::TagSchema;
use crate::validation::traits::{ValidationResult, Validator};
use async_trait::async_trait;
use std::path::Path;

/// Validator that checks a completion carries one reasoning span followed
/// by one answer span
pub struct TagFormatValidator {
    schema: TagSchema,
    description: String,
}

impl TagFormatValidator {
    /// Create a validator for the given delimiter schema
    pub fn new(schema: TagSchema) -> Self {
        Self {
            schema,
            description: "tag format validator".to_string(),
        }
    }

    /// Set the validator description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check completion text in memory
    pub fn check_text(&self, content: &str) -> ValidationResult {
        let s = &self.schema;
        let mut errors = Vec::new();

        for (marker, label) in [
            (&s.think_open, "reasoning opening"),
            (&s.think_close, "reasoning closing"),
            (&s.answer_open, "answer opening"),
            (&s.answer_close, "answer closing"),
        ] {
            let count = TagSchema::occurrences(content, marker);
            if count != 1 {
                errors.push(format!(
                    "expected exactly one {} marker {}, found {}",
                    label, marker, count
                ));
            }
        }

        if errors.is_empty() {
            // Counts are right; check ordering and answer content
            let positions = [
                content.find(&s.think_open),
                content.find(&s.think_close),
                content.find(&s.answer_open),
                content.find(&s.answer_close),
            ];
            let ordered = matches!(positions, [Some(a), Some(b), Some(c), Some(d)] if a < b && b < c && c < d);
            if !ordered {
                errors.push("delimiter markers are out of order".to_string());
            } else if s.answer_span(content).map(str::trim).unwrap_or("").is_empty() {
                errors.push("empty answer span".to_string());
            }
        }

        if errors.is_empty() {
            ValidationResult::pass_with_output("completion is compliant")
        } else {
            tracing::debug!(errors = errors.len(), "Non-compliant completion");
            ValidationResult::fail_with_errors(errors)
        }
    }
}

impl Default for TagFormatValidator {
    fn default() -> Self {
        Self::new(TagSchema::default())
    }
}

#[async_trait]
impl Validator for TagFormatValidator {
    async fn validate(&self, path: &Path) -> Result<ValidationResult> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) => {
                return Ok(ValidationResult::fail(format!(
                    "Failed to read completion {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        Ok(self.check_text(&content))
    }

    fn description(&self) -> &str {
        &self.description
    }
}
