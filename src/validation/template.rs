// Validation System - Template Validator
// Checks that a prompt template's embedded examples obey the format it prescribes

use crate::error::Result;
use crate::tags::TagSchema;
use crate::validation::traits::{ValidationResult, Validator};
use async_trait::async_trait;
use std::path::Path;

/// Validator that checks a template asset against its own delimiter
/// contract
///
/// A template must carry at least one illustrative example, and every
/// example must be a well-formed instance of the format: one reasoning
/// span followed by one answer span, both closed, with the answer span a
/// bare result (single line, no prose sentences).
pub struct TemplateValidator {
    schema: TagSchema,
    description: String,
}

impl TemplateValidator {
    /// Create a validator for the given delimiter schema
    pub fn new(schema: TagSchema) -> Self {
        Self {
            schema,
            description: "template validator".to_string(),
        }
    }

    /// Check template text in memory
    pub fn check_text(&self, content: &str) -> ValidationResult {
        let s = &self.schema;
        let mut errors = Vec::new();
        let mut examples = 0;
        let mut pos = 0;

        while let Some(rel) = content[pos..].find(&s.think_open) {
            examples += 1;
            let think_start = pos + rel + s.think_open.len();

            let Some(rel) = content[think_start..].find(&s.think_close) else {
                errors.push(format!("example {}: unclosed reasoning span", examples));
                break;
            };
            let after_think = think_start + rel + s.think_close.len();

            let Some(rel) = content[after_think..].find(&s.answer_open) else {
                errors.push(format!("example {}: no answer span after reasoning", examples));
                break;
            };
            let answer_start = after_think + rel + s.answer_open.len();
            if content[after_think..answer_start].contains(s.think_open.as_str()) {
                errors.push(format!(
                    "example {}: reasoning span not followed by an answer span",
                    examples
                ));
                break;
            }

            let Some(rel) = content[answer_start..].find(&s.answer_close) else {
                errors.push(format!("example {}: unclosed answer span", examples));
                break;
            };
            self.check_answer(examples, &content[answer_start..answer_start + rel], &mut errors);
            pos = answer_start + rel + s.answer_close.len();
        }

        if examples == 0 {
            errors.push("template has no delimited examples".to_string());
        } else if errors.is_empty() && TagSchema::occurrences(content, &s.answer_open) != examples {
            errors.push("answer markers appear outside the examples".to_string());
        }

        if errors.is_empty() {
            ValidationResult::pass_with_output(format!(
                "{} well-formed example(s) found",
                examples
            ))
        } else {
            ValidationResult::fail_with_errors(errors)
        }
    }

    /// An example answer span must be a bare result: non-empty, a single
    /// line, and free of sentence punctuation
    fn check_answer(&self, example: usize, raw: &str, errors: &mut Vec<String>) {
        let answer = raw.trim();
        if answer.is_empty() {
            errors.push(format!("example {}: empty answer span", example));
        } else if answer.lines().count() > 1 {
            errors.push(format!("example {}: answer span spans multiple lines", example));
        } else if answer.ends_with('.') || answer.contains(". ") {
            errors.push(format!("example {}: answer span contains prose", example));
        }
    }
}

impl Default for TemplateValidator {
    fn default() -> Self {
        Self::new(TagSchema::default())
    }
}

#[async_trait]
impl Validator for TemplateValidator {
    async fn validate(&self, path: &Path) -> Result<ValidationResult> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) => {
                return Ok(ValidationResult::fail(format!(
                    "Failed to read template {}: {}",
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
