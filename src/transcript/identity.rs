//! Content-derived session identity.
//!
//! The id is the MD5 digest of a canonical serialization: object keys
//! sorted, no insignificant whitespace. Only accidental collisions matter
//! here; the digest is not used for anything security related.

use std::fmt::Write;

use serde_json::Value;

/// Hex digest identifying a session document by content.
pub fn content_id(document: &Value) -> String {
    format!("{:x}", md5::compute(canonical_json(document)))
}

/// Serialize with object keys in sorted order, independent of insertion order.
///
/// `serde_json::to_string` only sorts keys while its `preserve_order` feature is off.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
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
        Value::String(s) => write_string(s, out),
        // null, booleans and numbers have a single compact form
        scalar => {
            let _ = write!(out, "{}", scalar);
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    // Display of a JSON string value is its escaped, quoted form
    let _ = write!(out, "{}", Value::String(s.to_string()));
}
