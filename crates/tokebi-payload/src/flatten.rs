//! Recursive payload flattening.
//!
//! Key scheme, applied to each `key: value` pair under `prefix`:
//! - scalar (including `null`) → `prefix_key: value`
//! - object → recurse with prefix `prefix_key`
//! - array → element `i` (1-based) becomes `prefix_key_i`, recursing when
//!   the element is itself an object or array; then `prefix_key_count`
//!   holds the array length.
//!
//! An array reached as a *record* (an array nested directly inside an
//! array, or a top-level array payload) is keyed by its 0-based indices
//! and gets no `_count` entry.
//!
//! Later writes win on key collisions; iteration follows input order.

use serde::Serialize;
use serde_json::Value;
use tokebi_core::errors::PayloadError;
use tokebi_core::FlatMap;

/// Flatten a payload. Non-container payloads flatten to an empty map.
pub fn flatten(value: &Value) -> FlatMap {
    flatten_with_prefix(value, "")
}

/// Flatten a payload, prefixing every emitted key with `prefix_`.
pub fn flatten_with_prefix(value: &Value, prefix: &str) -> FlatMap {
    let mut out = FlatMap::new();
    flatten_record(value, prefix, &mut out);
    out
}

/// Serialize any payload and flatten it.
pub fn to_flat_payload<P: Serialize + ?Sized>(
    event_type: &str,
    payload: &P,
) -> Result<FlatMap, PayloadError> {
    let value = serde_json::to_value(payload).map_err(|e| PayloadError::Serialization {
        event_type: event_type.to_string(),
        reason: e.to_string(),
    })?;
    Ok(flatten(&value))
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}_{key}")
    }
}

/// Enumerate a container's entries the way a record is walked.
fn flatten_record(record: &Value, prefix: &str, out: &mut FlatMap) {
    match record {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_entry(&join(prefix, key), value, out);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_entry(&join(prefix, &index.to_string()), value, out);
            }
        }
        // Scalars have no entries.
        _ => {}
    }
}

fn flatten_entry(key: &str, value: &Value, out: &mut FlatMap) {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_key = format!("{key}_{}", index + 1);
                if item.is_object() || item.is_array() {
                    flatten_record(item, &item_key, out);
                } else {
                    out.insert(item_key, item.clone());
                }
            }
            out.insert(format!("{key}_count"), Value::from(items.len()));
        }
        Value::Object(_) => flatten_record(value, key, out),
        scalar => {
            out.insert(key.to_string(), scalar.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_skips_separator_for_empty_prefix() {
        assert_eq!(join("", "gold"), "gold");
        assert_eq!(join("hero", "gold"), "hero_gold");
    }

    #[test]
    fn empty_array_only_emits_count() {
        let flat = flatten(&json!({"party": []}));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["party_count"], json!(0));
    }
}
