// Validation System
// Implements validators for delimiter compliance - completion transcripts and template assets

pub mod format;
pub mod template;
pub mod traits;

pub use format::TagFormatValidator;
pub use template::TemplateValidator;
pub use traits::{ValidationResult, Validator};
