//! Nested JSON value access
//!
//! Walks a JSON object by a sequence of keys, for raw-field lookup on API
//! payloads (the `--field a.b.c` flag on `ghorg org`).

use serde_json::Value;

use crate::error::{Error, Result};

/// Resolve `path` inside `value`, key by key.
///
/// Returns the value at the end of the path. A missing key, or a path step
/// into something that is not an object, is an error naming the offending key.
pub fn access_nested<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for key in path {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| Error::MissingKey((*key).to_string()))?;
    }
    Ok(current)
}
