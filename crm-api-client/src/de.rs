// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Lenient decoding helpers
//!
//! The back office is loose about types: ids come back as numbers or as
//! numeric strings, and optional columns come back as `null`. These helpers
//! keep one odd row from failing a whole list.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
    Float(f64),
}

impl RawId {
    fn into_id<E: de::Error>(self) -> Result<Option<u64>, E> {
        match self {
            RawId::Number(n) => Ok(Some(n)),
            RawId::Float(f) if f >= 0.0 && f.fract() == 0.0 => Ok(Some(f as u64)),
            RawId::Float(f) => Err(E::custom(format!("invalid id {f}"))),
            RawId::Text(s) if s.trim().is_empty() => Ok(None),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid id {s:?}"))),
        }
    }
}

/// `deserialize_with` for ids: `7`, `"7"` and `null` (as 0).
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    opt_id(deserializer).map(Option::unwrap_or_default)
}

/// `deserialize_with` for optional ids: `7`, `"7"`, `""` and `null`.
pub fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    match Option::<RawId>::deserialize(deserializer)? {
        Some(raw) => raw.into_id(),
        None => Ok(None),
    }
}

/// Drop `null` object members, recursively, so that `#[serde(default)]`
/// fills them in.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "id")]
        id: u64,
        #[serde(deserialize_with = "opt_id")]
        parent_id: Option<u64>,
        name: String,
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let rows: Vec<Row> = serde_json::from_value(json!([
            {"id": 1, "parent_id": 4, "name": "a"},
            {"id": "2", "parent_id": "", "name": "b"},
            {"id": 3.0, "name": "c"}
        ]))
        .unwrap();
        let ids: Vec<_> = rows.iter().map(|r| (r.id, r.parent_id)).collect();
        assert_eq!(ids, vec![(1, Some(4)), (2, None), (3, None)]);
    }

    #[test]
    fn test_non_numeric_id_is_an_error() {
        let result: Result<Row, _> = serde_json::from_value(json!({"id": "abc"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_strip_nulls_lets_defaults_apply() {
        let value = strip_nulls(json!({"id": 5, "parent_id": null, "name": null}));
        assert_eq!(value, json!({"id": 5}));
        let row: Row = serde_json::from_value(value).unwrap();
        assert_eq!(row, Row { id: 5, parent_id: None, name: String::new() });
    }

    #[test]
    fn test_strip_nulls_keeps_null_array_items() {
        let value = strip_nulls(json!({"data": [null, {"a": null, "b": 1}]}));
        assert_eq!(value, json!({"data": [null, {"b": 1}]}));
    }
}
