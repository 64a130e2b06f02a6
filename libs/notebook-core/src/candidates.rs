//! Validation of question lists produced by a generator collaborator.
//!
//! The generator hands back a JSON array of `{type, question, answer}`
//! objects. Output is accepted only when every element carries a non-empty
//! question and answer; anything else rejects the whole response.

use serde_json::{Map, Value};

use crate::error::ExtractError;
use crate::types::CandidateCard;

/// Kind recorded when an element has no `type` field.
pub const DEFAULT_KIND: &str = "generated";

/// Trim `text`, failing when nothing is left.
pub fn require_text(text: &str) -> Result<&str, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    Ok(trimmed)
}

/// Convert a generator response into candidates, all or nothing.
pub fn validate_generated(value: Value) -> Result<Vec<CandidateCard>, ExtractError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ExtractError::MalformedResponse(format!(
                "expected an array, got {}",
                type_name(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(ExtractError::MalformedResponse("no question-answer pairs".to_string()));
    }

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| candidate(idx, item))
        .collect()
}

fn candidate(idx: usize, item: &Value) -> Result<CandidateCard, ExtractError> {
    let object = item
        .as_object()
        .ok_or_else(|| ExtractError::MalformedResponse(format!("element {} is not an object", idx)))?;

    let question = required_str(object, idx, "question")?;
    let answer = required_str(object, idx, "answer")?;
    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_KIND);

    Ok(CandidateCard::new(question, answer, kind))
}

fn required_str<'a>(object: &'a Map<String, Value>, idx: usize, name: &str) -> Result<&'a str, ExtractError> {
    object
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ExtractError::MalformedResponse(format!("element {} has no {}", idx, name)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
