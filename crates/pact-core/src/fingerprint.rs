//! Content fingerprints.
//!
//! A fingerprint is the lowercase hex SHA-256 of a value's canonical JSON
//! form. The canonical form sorts object keys at every nesting level and
//! emits no insignificant whitespace, so the digest depends only on content,
//! never on key insertion order. Fingerprints are opaque identifiers: they
//! are compared for equality and never parsed.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Fingerprint a JSON value.
#[must_use]
pub fn fingerprint(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_json(value).as_bytes());
    hex::encode(hasher.finalize())
}

/// Fingerprint any serializable value through its JSON representation.
///
/// # Errors
///
/// Returns `serde_json::Error` if `value` cannot be represented as JSON
/// (for example a map with non-string keys).
pub fn fingerprint_of<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(fingerprint(&serde_json::to_value(value)?))
}

/// Render `value` as compact JSON with object keys sorted at every level.
#[must_use]
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Scalar `Display` is compact JSON with proper escaping.
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
