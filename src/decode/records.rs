//! JSON record extraction and normalization

use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;
use tracing::debug;

/// JSON decoder with optional record path extraction
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// Dot-separated path to the records
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// Parse a response body and normalize it into records
    pub fn decode(&self, body: &str) -> Result<Vec<Record>> {
        let value: Value = serde_json::from_str(body)?;
        self.records(value)
    }

    /// Normalize an already parsed document into records
    pub fn records(&self, value: Value) -> Result<Vec<Record>> {
        let value = match &self.record_path {
            Some(path) => extract_path(&value, path).cloned().ok_or_else(|| {
                Error::schema(format!("record path '{path}' not found in response"))
            })?,
            None => value,
        };

        normalize(value)
    }
}

/// Normalize a JSON value into an ordered record sequence
fn normalize(value: Value) -> Result<Vec<Record>> {
    match value {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => {
            let records = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(map) => Ok(map),
                    other => Err(Error::schema(format!(
                        "array element {index} is {}, expected an object",
                        json_type_name(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            debug!("Normalized array into {} records", records.len());
            Ok(records)
        }
        other => Err(Error::schema(format!(
            "top-level value is {}, expected an object or an array of objects",
            json_type_name(&other)
        ))),
    }
}

/// Follow a dot-separated path through objects and arrays
///
/// Accepts an optional `$.` prefix. A segment is an object key, an array
/// index (`items.0`), or a key with a bracketed index (`items[0]`, `items[-1]`).
fn extract_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        if let Some((name, rest)) = part.split_once('[') {
            if !name.is_empty() {
                current = current.get(name)?;
            }
            let index = rest.strip_suffix(']')?.parse::<i64>().ok()?;
            current = index_array(current, index)?;
        } else if let Ok(index) = part.parse::<i64>() {
            current = match current {
                Value::Array(_) => index_array(current, index)?,
                _ => current.get(part)?,
            };
        } else {
            current = current.get(part)?;
        }
    }

    Some(current)
}

fn index_array(value: &Value, index: i64) -> Option<&Value> {
    let arr = value.as_array()?;
    let idx = if index < 0 {
        arr.len().checked_sub(index.unsigned_abs() as usize)?
    } else {
        index as usize
    };
    arr.get(idx)
}

/// Human-readable name of a JSON value's type, for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
