//! Storage boundary for forests
//!
//! The storage collaborator keeps each forest as one JSON column. Decoding
//! happens here, once, so the operations only ever see well-typed nodes.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{FolderTreeError, Result};
use crate::model::Forest;

/// Decode a forest from its JSON text
///
/// # Errors
/// * `Serialization` - If the text is not a JSON array of nodes (or `null`)
pub fn decode_forest(json: &str) -> Result<Forest> {
    let value: Value = serde_json::from_str(json)?;
    decode_forest_value(&value)
}

/// Decode a forest from an already-parsed JSON column
///
/// `null` is the value of a freshly initialised record and decodes to an
/// empty forest.
///
/// # Errors
/// * `Serialization` - If the value is neither `null` nor an array of nodes
pub fn decode_forest_value(value: &Value) -> Result<Forest> {
    match value {
        Value::Null => Ok(Forest::new()),
        Value::Array(_) => Ok(Forest::deserialize(value)?),
        other => Err(FolderTreeError::Serialization {
            message: format!("expected a JSON array of folders, found {}", kind_of(other)),
        }),
    }
}

/// Encode a forest as JSON text
///
/// # Errors
/// * `Serialization` - If encoding fails
pub fn encode_forest(forest: &Forest) -> Result<String> {
    Ok(serde_json::to_string(forest)?)
}

/// Encode a forest as a JSON value for a JSON column
///
/// # Errors
/// * `Serialization` - If encoding fails
pub fn encode_forest_value(forest: &Forest) -> Result<Value> {
    Ok(serde_json::to_value(forest)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
