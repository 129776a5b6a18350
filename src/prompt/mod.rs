//! Prompt System - Builtin assets and template loading
//!
//! This module holds the embedded reasoning template and the loader that
//! resolves template names from a directory on disk, falling back to the
//! builtin registry.

mod builtin;
mod loader;

pub use builtin::{REASONING, builtin, builtin_names};
pub use loader::PromptLoader;
