//! Total accessors over untyped API responses.
//!
//! Nothing in here returns an error. A missing key, a `null`, or a value of
//! the wrong type reads as "absent" (`None`, an empty sequence, `""` or `0`),
//! so a renderer can always produce some output.

use serde_json::{Map, Number, Value};

/// A JSON object as produced by the API.
pub type Object = Map<String, Value>;

/// Parse a response body that is expected to be a JSON object.
///
/// Anything else (invalid JSON, an array, a scalar, `null`) yields `None`;
/// callers then emit the bytes verbatim.
pub fn parse(bytes: &[u8]) -> Option<Object> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Parse any JSON document, including arrays and scalars.
pub fn parse_any(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice(bytes).ok()
}

/// Re-serialise with two-space indentation.
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Walk `keys` from `obj`, each step landing on a nested object.
///
/// All-or-nothing: the first missing, `null`, or non-object step yields `None`.
pub fn descend<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Object> {
    keys.iter()
        .try_fold(obj, |current, key| current.get(*key)?.as_object())
}

/// Normalize a single-object-or-array value into a row set.
///
/// Returns `None` when the value is absent or neither an object nor an array,
/// which lets callers tell "no envelope" apart from "empty list".
/// Non-object array elements are dropped.
pub fn row_set(value: Option<&Value>) -> Option<Vec<&Object>> {
    match value? {
        Value::Array(items) => Some(items.iter().filter_map(Value::as_object).collect()),
        Value::Object(map) => Some(vec![map]),
        _ => None,
    }
}

/// Like [`row_set`], with absence flattened to an empty sequence.
pub fn rows(value: Option<&Value>) -> Vec<&Object> {
    row_set(value).unwrap_or_default()
}

/// Display strings for an array of scalars.
///
/// Integral numbers render without a decimal point, other numbers with two
/// decimals. `null` and nested containers are skipped; non-array input yields
/// an empty sequence.
pub fn strings(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items.iter().filter_map(scalar_text).collect()
}

/// String view of `obj[key]`; `""` when missing, `null`, or a container.
pub fn text(obj: &Object, key: &str) -> String {
    obj.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Numeric view of `obj[key]`; `0.0` unless the value is a JSON number.
pub fn number(obj: &Object, key: &str) -> f64 {
    obj.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Evaluate candidate lookups in order, stopping at the first that resolves.
///
/// Used wherever the API spells the same envelope more than one way.
pub fn first_of<'a, T, F>(obj: &'a Object, candidates: &[F]) -> Option<T>
where
    F: Fn(&'a Object) -> Option<T>,
{
    candidates.iter().find_map(|candidate| candidate(obj))
}

/// Render a number the way every table cell expects it.
pub fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let f = n.as_f64().unwrap_or(0.0);
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        format!("{}", f as i64)
    } else {
        format!("{:.2}", f)
    }
}

/// Best-effort one-line rendering of any value, for unstructured dumps.
///
/// Scalars read as in [`text`], `null` as `null`, containers as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
        scalar => scalar_text(scalar).unwrap_or_default(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_parse_accepts_only_objects() {
        assert!(parse(br#"{"a": 1}"#).is_some());
        assert!(parse(b"[1, 2]").is_none());
        assert!(parse(b"null").is_none());
        assert!(parse(b"\"quote\"").is_none());
        assert!(parse(b"<html>Bad Gateway</html>").is_none());
        assert!(parse(b"").is_none());
    }

    #[test]
    fn test_parse_any_keeps_non_objects() {
        assert_eq!(parse_any(b"[1,2]"), Some(json!([1, 2])));
        assert_eq!(parse_any(b"not json"), None);
    }

    #[test]
    fn test_to_pretty_uses_two_spaces() {
        let pretty = to_pretty(&json!({"clock": {"state": "open"}}));
        assert_eq!(pretty, "{\n  \"clock\": {\n    \"state\": \"open\"\n  }\n}");
    }

    #[test]
    fn test_descend_walks_nested_objects() {
        let root = obj(json!({"orders": {"order": {"id": 7}}}));
        let order = descend(&root, &["orders", "order"]).unwrap();
        assert_eq!(text(order, "id"), "7");
    }

    #[test]
    fn test_descend_is_all_or_nothing() {
        let root = obj(json!({
            "orders": "null",
            "history": null,
            "positions": {"position": [1, 2]}
        }));
        assert!(descend(&root, &["orders"]).is_none());
        assert!(descend(&root, &["history"]).is_none());
        assert!(descend(&root, &["positions", "position"]).is_none());
        assert!(descend(&root, &["missing", "deeper"]).is_none());
        assert!(descend(&root, &[]).is_some());
    }

    #[test]
    fn test_rows_treats_object_and_singleton_array_alike() {
        let single = json!({"symbol": "AAPL"});
        let array = json!([{"symbol": "AAPL"}]);
        assert_eq!(rows(Some(&single)), rows(Some(&array)));
        assert_eq!(rows(Some(&single)).len(), 1);
    }

    #[test]
    fn test_rows_drops_non_objects() {
        let mixed = json!([{"id": 1}, "noise", 3, null, {"id": 2}]);
        let result = rows(Some(&mixed));
        assert_eq!(result.len(), 2);
        assert_eq!(text(result[1], "id"), "2");
    }

    #[test]
    fn test_row_set_distinguishes_absent_from_empty() {
        assert!(row_set(None).is_none());
        assert!(row_set(Some(&json!("null"))).is_none());
        assert_eq!(row_set(Some(&json!([]))).map(|r| r.len()), Some(0));
        assert!(rows(None).is_empty());
    }

    #[test]
    fn test_strings_formats_numbers() {
        let value = json!(["2026-02-20", 14, 14.5, 27.25, true, null, {"x": 1}]);
        assert_eq!(
            strings(Some(&value)),
            vec!["2026-02-20", "14", "14.50", "27.25", "true"]
        );
        assert!(strings(Some(&json!({"date": "2026-02-20"}))).is_empty());
        assert!(strings(None).is_empty());
    }

    #[test]
    fn test_text_defaults() {
        let row = obj(json!({
            "name": "cash",
            "qty": 10.0,
            "price": 1.5,
            "day_trader": false,
            "missing": null,
            "nested": {"a": 1},
            "list": [1]
        }));
        assert_eq!(text(&row, "name"), "cash");
        assert_eq!(text(&row, "qty"), "10");
        assert_eq!(text(&row, "price"), "1.50");
        assert_eq!(text(&row, "day_trader"), "false");
        assert_eq!(text(&row, "missing"), "");
        assert_eq!(text(&row, "nested"), "");
        assert_eq!(text(&row, "list"), "");
        assert_eq!(text(&row, "absent"), "");
    }

    #[test]
    fn test_number_defaults() {
        let row = obj(json!({"a": 12.5, "b": "12.5", "c": null, "d": -3}));
        assert_eq!(number(&row, "a"), 12.5);
        assert_eq!(number(&row, "b"), 0.0);
        assert_eq!(number(&row, "c"), 0.0);
        assert_eq!(number(&row, "d"), -3.0);
        assert_eq!(number(&row, "e"), 0.0);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("ok")), "ok");
        assert_eq!(display_value(&json!(2.0)), "2");
        assert_eq!(display_value(&json!(null)), "null");
        assert_eq!(display_value(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_first_of_stops_at_first_hit() {
        fn plural(o: &Object) -> Option<&Object> {
            descend(o, &["position_groups"])
        }
        fn singular(o: &Object) -> Option<&Object> {
            descend(o, &["positiongroups"])
        }

        let root = obj(json!({"positiongroups": {"id": "b"}}));
        let found = first_of(&root, &[plural as fn(&Object) -> Option<&Object>, singular]);
        assert_eq!(found.map(|g| text(g, "id")), Some("b".to_string()));

        let empty = Object::new();
        let found = first_of(&empty, &[plural as fn(&Object) -> Option<&Object>, singular]);
        assert!(found.is_none());
    }
}
