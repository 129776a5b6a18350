//! Builtin templates embedded in the binary
//!
//! The reasoning template is compiled in via `include_str!` so a pipeline
//! can resolve it with no templates directory on disk. The asset is inert
//! configuration data: it is read-only, has no parameters, and every read
//! returns the same bytes.

/// The reasoning prompt template
///
/// Instructs a model to wrap its reasoning in `<think>` tags and its
/// final answer in `<answer>` tags, with two worked examples.
pub const REASONING: &str = include_str!("../../assets/reasoning.md");

/// Look up a builtin template by name
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "reasoning" => Some(REASONING),
        _ => None,
    }
}

/// Names of all builtin templates
pub fn builtin_names() -> Vec<&'static str> {
    vec!["reasoning"]
}
