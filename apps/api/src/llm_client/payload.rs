//! Structured payload extraction from free-form LLM text.
//!
//! Every service that asks a provider for JSON goes through `parse_structured`, and every
//! service that asks for plain text goes through `strip_fences`. Provider output is
//! untrusted: a missing or invalid object is reported, never guessed at.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response contained no JSON object")]
    NoJsonObject,

    #[error("invalid JSON payload: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Strips a leading ```` ```lang ```` line and a trailing ```` ``` ```` from model output.
pub fn strip_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            // Single-line answer such as ```json {"a":1}```
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Returns the slice from the first `{` to the last `}` inclusive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parses a JSON object out of model output.
/// Tries the fence-stripped text first, then the brace-delimited slice.
pub fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, PayloadError> {
    let stripped = strip_fences(text);
    match serde_json::from_str(stripped) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            let object = extract_json_object(stripped).ok_or(PayloadError::NoJsonObject)?;
            if object.len() == stripped.len() {
                return Err(PayloadError::Invalid(first_err));
            }
            serde_json::from_str(object).map_err(PayloadError::Invalid)
        }
    }
}

/// Cleans one line of a "one item per line" answer: surrounding whitespace and
/// list markers (`-`, `*`, `•`) are removed.
pub fn clean_skill_line(line: &str) -> &str {
    line.trim()
        .trim_matches(|c: char| c == '-' || c == ' ')
        .trim_matches(|c: char| c == '*' || c == ' ')
        .trim_matches(|c: char| c == '•' || c == ' ')
}
