//! Request Payload Guard
//!
//! Entity creation accepts raw JSON and rejects an empty payload with a
//! 400 before any store access. Field-level validation stays minimal on
//! purpose; the store enforces the integrity rules.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BlogError, BlogResult};

/// Parse a JSON body into a typed request, failing on empty payloads
pub fn parse_payload<T: DeserializeOwned>(payload: Value) -> BlogResult<T> {
    let is_empty = match &payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        // Scalars carry no fields to save
        Value::Bool(_) | Value::Number(_) => true,
    };

    if is_empty {
        return Err(BlogError::EmptyPayload);
    }

    serde_json::from_value(payload).map_err(BlogError::from)
}
