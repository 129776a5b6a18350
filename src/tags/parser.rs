//! Completion parser - extract reasoning and answer spans from model output
//!
//! This is the downstream half of the delimiter contract: the prompt asks
//! the model to emit `<think>...</think><answer>...</answer>`, and this
//! parser recovers the two spans. `parse_completion` is strict and names
//! the specific defect when output is non-compliant; the `extract_*`
//! helpers are lenient for callers that fall back to raw output.

use crate::error::{PromptrError, Result};
use crate::tags::TagSchema;

/// A completion broken into its tagged spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCompletion {
    /// Content of the reasoning span, if the completion carried one
    pub reasoning: Option<String>,
    /// Content of the answer span, trimmed
    pub answer: String,
}

/// Parse a completion strictly against a tag schema
///
/// Requires exactly one closed answer span with non-empty content. The
/// reasoning span is optional, but an opened reasoning span must be
/// closed. Span content is returned trimmed.
///
/// # Errors
/// `MalformedOutput` naming the missing or duplicated marker.
pub fn parse_completion(text: &str, schema: &TagSchema) -> Result<ParsedCompletion> {
    let opens = TagSchema::occurrences(text, &schema.answer_open);
    if opens == 0 {
        return Err(PromptrError::MalformedOutput(format!(
            "missing {} marker",
            schema.answer_open
        )));
    }
    if opens > 1 {
        return Err(PromptrError::MalformedOutput(format!(
            "multiple {} markers",
            schema.answer_open
        )));
    }

    let answer = schema.answer_span(text).ok_or_else(|| {
        PromptrError::MalformedOutput(format!("unclosed answer span: missing {}", schema.answer_close))
    })?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(PromptrError::MalformedOutput("empty answer span".to_string()));
    }

    let reasoning = if TagSchema::occurrences(text, &schema.think_open) > 0 {
        let span = schema.think_span(text).ok_or_else(|| {
            PromptrError::MalformedOutput(format!("unclosed think span: missing {}", schema.think_close))
        })?;
        Some(span.trim().to_string())
    } else {
        None
    };

    Ok(ParsedCompletion {
        reasoning,
        answer: answer.to_string(),
    })
}

/// Extract the answer span leniently, trimmed
///
/// Returns the first closed answer span, or None when the completion is
/// non-compliant. Handling the None case (retry, fall back to raw output,
/// flag for review) is the caller's policy.
pub fn extract_answer(text: &str, schema: &TagSchema) -> Option<String> {
    schema.answer_span(text).map(|s| s.trim().to_string())
}

/// Extract the reasoning span leniently, trimmed
pub fn extract_reasoning(text: &str, schema: &TagSchema) -> Option<String> {
    schema.think_span(text).map(|s| s.trim().to_string())
}

/// Check full compliance: exactly one closed reasoning span followed by
/// exactly one closed answer span
pub fn is_compliant(text: &str, schema: &TagSchema) -> bool {
    if TagSchema::occurrences(text, &schema.think_open) != 1
        || TagSchema::occurrences(text, &schema.think_close) != 1
        || TagSchema::occurrences(text, &schema.answer_open) != 1
        || TagSchema::occurrences(text, &schema.answer_close) != 1
    {
        return false;
    }

    // Ordering: think open < think close < answer open < answer close
    let positions = [
        text.find(&schema.think_open),
        text.find(&schema.think_close),
        text.find(&schema.answer_open),
        text.find(&schema.answer_close),
    ];
    match positions {
        [Some(a), Some(b), Some(c), Some(d)] => a < b && b < c && c < d,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLIANT: &str = "<think>\n6 times 7 is 42.\n</think>\n<answer>\n42\n</answer>";

    fn schema() -> TagSchema {
        TagSchema::default()
    }

    #[test]
    fn test_parse_compliant_completion() {
        let parsed = parse_completion(COMPLIANT, &schema()).unwrap();
        assert_eq!(parsed.reasoning.as_deref(), Some("6 times 7 is 42."));
        assert_eq!(parsed.answer, "42");
    }

    #[test]
    fn test_parse_answer_only() {
        let parsed = parse_completion("<answer>\\frac{3}{8}</answer>", &schema()).unwrap();
        assert_eq!(parsed.reasoning, None);
        assert_eq!(parsed.answer, "\\frac{3}{8}");
    }

    #[test]
    fn test_parse_trims_spans() {
        let text = "<think>  padded  </think><answer>  42  </answer>";
        let parsed = parse_completion(text, &schema()).unwrap();
        assert_eq!(parsed.reasoning.as_deref(), Some("padded"));
        assert_eq!(parsed.answer, "42");
    }

    #[test]
    fn test_parse_missing_answer_open() {
        let result = parse_completion("<think>reasoning</think> 42", &schema());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing <answer> marker"));
    }

    #[test]
    fn test_parse_unclosed_answer() {
        let result = parse_completion("<answer>42", &schema());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing </answer>"));
    }

    #[test]
    fn test_parse_multiple_answer_spans() {
        let text = "<answer>1</answer><answer>2</answer>";
        let result = parse_completion(text, &schema());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("multiple <answer> markers"));
    }

    #[test]
    fn test_parse_empty_answer() {
        let result = parse_completion("<answer>   </answer>", &schema());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty answer span"));
    }

    #[test]
    fn test_parse_unclosed_think() {
        let result = parse_completion("<think>reasoning <answer>42</answer>", &schema());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing </think>"));
    }

    #[test]
    fn test_parse_custom_schema() {
        let schema = TagSchema::new("[R]", "[/R]", "[A]", "[/A]");
        let parsed = parse_completion("[R]half of 3/4[/R][A]3/8[/A]", &schema).unwrap();
        assert_eq!(parsed.reasoning.as_deref(), Some("half of 3/4"));
        assert_eq!(parsed.answer, "3/8");
    }

    #[test]
    fn test_extract_answer() {
        assert_eq!(extract_answer(COMPLIANT, &schema()), Some("42".to_string()));
    }

    #[test]
    fn test_extract_answer_non_compliant() {
        assert_eq!(extract_answer("no markers", &schema()), None);
        assert_eq!(extract_answer("<answer>unclosed", &schema()), None);
    }

    #[test]
    fn test_extract_answer_first_span_wins() {
        let text = "<answer>first</answer><answer>second</answer>";
        assert_eq!(extract_answer(text, &schema()), Some("first".to_string()));
    }

    #[test]
    fn test_extract_reasoning() {
        assert_eq!(
            extract_reasoning(COMPLIANT, &schema()),
            Some("6 times 7 is 42.".to_string())
        );
    }

    #[test]
    fn test_extract_reasoning_absent() {
        assert_eq!(extract_reasoning("<answer>42</answer>", &schema()), None);
    }

    #[test]
    fn test_is_compliant_true() {
        assert!(is_compliant(COMPLIANT, &schema()));
    }

    #[test]
    fn test_is_compliant_missing_think() {
        assert!(!is_compliant("<answer>42</answer>", &schema()));
    }

    #[test]
    fn test_is_compliant_wrong_order() {
        let text = "<answer>42</answer><think>after the fact</think>";
        assert!(!is_compliant(text, &schema()));
    }

    #[test]
    fn test_is_compliant_duplicated_pair() {
        let text = "<think>a</think><think>b</think><answer>42</answer>";
        assert!(!is_compliant(text, &schema()));
    }

    #[test]
    fn test_is_compliant_unclosed() {
        assert!(!is_compliant("<think>a</think><answer>42", &schema()));
    }

    #[test]
    fn test_parse_latex_answer() {
        let text = "<think>one half of 3/4 is 3/8</think><answer>\\frac{3}{8}</answer>";
        let parsed = parse_completion(text, &schema()).unwrap();
        assert_eq!(parsed.answer, "\\frac{3}{8}");
    }
}
