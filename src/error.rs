//! Error types for Promptr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Promptr
#[derive(Debug, Error)]
pub enum PromptrError {
    /// Template not found on disk or in the builtin registry
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Model output is missing or has malformed delimiter pairs
    #[error("Malformed output: {0}")]
    MalformedOutput(String),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Promptr operations
pub type Result<T> = std::result::Result<T, PromptrError>;
