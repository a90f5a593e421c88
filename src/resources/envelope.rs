//! Strict decoding of list envelopes.
//!
//! List endpoints answer with `{ "<collection>": [...], "count": n }`. The
//! collection field and an integer `count` must both be present; anything
//! else is a [`DecodeError`]. A `null` collection decodes as empty, since the
//! backend sends `null` when a filter matches nothing.
//!
//! The client does not enforce `count == len`; a disagreement is logged and
//! the collection is returned as sent.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{DecodeError, HttpResponse};

/// Decodes the collection stored under `key` in a list envelope.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not a JSON object, lacks `key` or
/// an integer `count`, or if any item does not decode as `T`.
pub fn decode_list<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &str,
    endpoint: &str,
) -> Result<Vec<T>, DecodeError> {
    let decode_error = |reason: String| DecodeError {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut body: Value = response.json(endpoint)?;
    let Some(envelope) = body.as_object_mut() else {
        return Err(decode_error("expected a JSON object envelope".to_string()));
    };

    let count = envelope
        .get("count")
        .ok_or_else(|| decode_error("missing field `count`".to_string()))?
        .as_u64()
        .ok_or_else(|| decode_error("field `count` is not a non-negative integer".to_string()))?;

    let items = match envelope.remove(key) {
        None => return Err(decode_error(format!("missing field `{key}`"))),
        Some(Value::Null) => Vec::new(),
        Some(value @ Value::Array(_)) => serde_json::from_value::<Vec<T>>(value)
            .map_err(|e| decode_error(format!("invalid item in `{key}`: {e}")))?,
        Some(_) => return Err(decode_error(format!("field `{key}` is not an array"))),
    };

    if usize::try_from(count).map_or(true, |count| count != items.len()) {
        tracing::warn!(
            endpoint = %endpoint,
            count,
            received = items.len(),
            "Envelope count does not match collection length"
        );
    }

    Ok(items)
}
