//! Model-response parsing: tolerate an optional Markdown code fence around
//! the JSON payload, then coerce into the target schema.

use crate::error::{AuditError, Result};
use serde::de::DeserializeOwned;

/// Strip a leading ```` ```json ````/```` ``` ```` opener and a trailing
/// ```` ``` ```` closer. Only a fence at the very start/end is handled;
/// leading prose before a fenced block is left in place and will fail JSON
/// decoding downstream.
pub fn strip_code_fence(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Decode a model response into `T` after fence stripping. Missing fields
/// take their declared defaults; invalid JSON or a type mismatch is a
/// `Parse` error.
pub fn parse_json_response<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(cleaned)
        .map_err(|e| AuditError::Parse(format!("model response is not valid JSON: {e}")))
}
