//! Response normalization: envelope unwrapping, client-side truncation,
//! and composite assembly.
//!
//! # Design Decisions
//! - `unwrap` is the single point where a classified failure becomes a
//!   caller-visible error
//! - Composite assembly degrades per slot instead of failing outright:
//!   a partial token summary beats no summary
//! - Everything here is a pure function of its inputs; the network effect
//!   lives entirely in the upstream client

use serde_json::{Map, Value};

use crate::upstream::types::{UpstreamError, UpstreamResult};

/// Strip the upstream `data` envelope from a successful result.
///
/// The upstream API consistently wraps real payloads in `{"data": ...}`;
/// callers should never see the envelope itself. Payloads without the key
/// pass through unchanged (a few endpoints skip the convention).
pub fn unwrap(result: UpstreamResult) -> Result<Value, UpstreamError> {
    match result {
        UpstreamResult::Failure { status, message } => {
            Err(UpstreamError::Upstream { status, message })
        }
        UpstreamResult::Success { payload, .. } => Ok(strip_envelope(payload)),
    }
}

fn strip_envelope(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Keep the first `limit` elements of an array payload, in order.
///
/// Idempotent: a limit at or past the end is a no-op, and non-array values
/// pass through unchanged.
pub fn truncate(value: Value, limit: usize) -> Value {
    match value {
        Value::Array(mut items) => {
            items.truncate(limit);
            Value::Array(items)
        }
        other => other,
    }
}

/// Empty structure a failed composite slot resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Object,
    Array,
}

impl Fallback {
    fn empty(self) -> Value {
        match self {
            Fallback::Object => Value::Object(Map::new()),
            Fallback::Array => Value::Array(Vec::new()),
        }
    }
}

/// Merge independently fetched parts into one composite object.
///
/// Each part is unwrapped on its own; a failing part resolves to its
/// declared empty fallback rather than aborting the whole response.
pub fn compose<I>(parts: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'static str, UpstreamResult, Fallback)>,
{
    let mut merged = Map::new();
    for (key, result, fallback) in parts {
        let value = match unwrap(result) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    key,
                    status = err.status(),
                    error = %err,
                    "Composite part failed, substituting empty fallback"
                );
                fallback.empty()
            }
        };
        merged.insert(key.to_string(), value);
    }
    merged
}
