//! Schema validation for model output. Never surfaced to callers: the orchestrator
//! either repairs or discards whatever fails here.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("expected a JSON object at the top level, got {0}")]
    NotAnObject(&'static str),

    #[error("missing or non-list `sections` field")]
    MissingSections,

    #[error("`sections` list is empty")]
    EmptySections,

    #[error("response does not match the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Valid iff `value` is an object holding a non-empty `sections` array.
pub fn validate_ui(value: Value) -> Result<Map<String, Value>, ValidationError> {
    let object = match value {
        Value::Object(object) => object,
        Value::Array(_) => return Err(ValidationError::NotAnObject("an array")),
        Value::Null => return Err(ValidationError::NotAnObject("null")),
        _ => return Err(ValidationError::NotAnObject("a scalar")),
    };

    match object.get("sections") {
        Some(Value::Array(sections)) if !sections.is_empty() => Ok(object),
        Some(Value::Array(_)) => Err(ValidationError::EmptySections),
        _ => Err(ValidationError::MissingSections),
    }
}
