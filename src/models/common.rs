//! Common types shared across all models.

use serde_json::{Map, Value};

/// A single library entry exactly as Last.fm returned it.
///
/// No schema is enforced; fields keep their server order so the JSON export
/// reproduces them verbatim.
pub type Record = Map<String, Value>;

/// Render a JSON value as a flat CSV cell.
///
/// Strings are taken verbatim, `null` becomes empty, and anything nested is
/// written as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Get a field from a record as text, returning an empty string if not found.
pub fn get_text(record: &Record, key: &str) -> String {
    record.get(key).map(value_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_value_text_scalars() {
        assert_eq!(value_text(&json!("Radiohead")), "Radiohead");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "");
    }

    #[test]
    fn test_value_text_nested() {
        assert_eq!(value_text(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_get_text_missing_is_empty() {
        let r = record(json!({"name": "Björk", "playcount": "12"}));
        assert_eq!(get_text(&r, "name"), "Björk");
        assert_eq!(get_text(&r, "playcount"), "12");
        assert_eq!(get_text(&r, "mbid"), "");
    }
}
