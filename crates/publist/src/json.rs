//! Safe lookups into registry JSON.
//!
//! Registry records are deeply nested and most leaves are optional or `null`.
//! These helpers walk a [`Value`] without ever panicking: a missing link in the
//! chain is "no value", and only [`required_str`] turns that into an error.

use super::*;

/// Returns the string under `entry[key]["value"]`, or `""`.
///
/// The registry wraps most scalar fields as `{"value": ...}` and uses `null`
/// for fields that are not set. Absent keys, `null`, non-object fields and
/// non-string values all yield the empty string.
pub fn value_of<'a>(entry: &'a Value, key: &str) -> &'a str {
  entry.get(key).and_then(|field| field.get("value")).and_then(Value::as_str).unwrap_or("")
}

/// Walks a slash-separated `path` of object keys and array indices.
///
/// ```
/// use publist::json::path;
/// use serde_json::json;
///
/// let doc = json!({ "bulk": [{ "work": { "put-code": 7 } }] });
/// assert_eq!(path(&doc, "bulk/0/work/put-code"), Some(&json!(7)));
/// assert_eq!(path(&doc, "bulk/1/work"), None);
/// ```
pub fn path<'a>(json: &'a Value, path: &str) -> Option<&'a Value> {
  let mut current = json;
  for part in path.split('/') {
    current = match current {
      Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
      _ => current.get(part)?,
    };
  }
  Some(current)
}

/// Like [`path`] but the value must be present and scalar.
///
/// Strings are returned as-is and numbers are rendered as text; anything else
/// (including `null`) is a [`PublistError::MissingField`] naming `field_path`.
pub fn required_str(json: &Value, field_path: &str) -> Result<String> {
  optional_str(json, field_path).ok_or_else(|| PublistError::MissingField(field_path.to_string()))
}

/// Like [`required_str`] but absence is `None` instead of an error.
pub fn optional_str(json: &Value, field_path: &str) -> Option<String> {
  match path(json, field_path)? {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}
