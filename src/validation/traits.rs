// Validation System - Traits
// Core validation interfaces

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Result of a validation operation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed
    pub passed: bool,
    /// Human-readable summary of the check
    pub output: String,
    /// List of specific errors found
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn pass() -> Self {
        Self {
            passed: true,
            output: String::new(),
            errors: Vec::new(),
        }
    }

    /// Create a passing result with output
    pub fn pass_with_output(output: impl Into<String>) -> Self {
        Self {
            passed: true,
            output: output.into(),
            errors: Vec::new(),
        }
    }

    /// Create a failing result with a single error
    pub fn fail(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            passed: false,
            output: error.clone(),
            errors: vec![error],
        }
    }

    /// Create a failing result with multiple errors
    pub fn fail_with_errors(errors: Vec<String>) -> Self {
        let output = errors.join("\n");
        Self {
            passed: false,
            output,
            errors,
        }
    }

    /// Add an error to this result
    pub fn add_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        self.errors.push(error.clone());
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(&error);
        self.passed = false;
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}

/// Trait for validators that check text artifacts on disk
#[async_trait]
pub trait Validator: Send + Sync {
    /// Validate the file at `path`
    ///
    /// # Returns
    /// ValidationResult indicating pass/fail with details
    async fn validate(&self, path: &Path) -> Result<ValidationResult>;

    /// Get a description of what this validator checks
    fn description(&self) -> &str {
        "validator"
    }
}
