//! Mapping from the remote table's JSON records to [`ProjectType`].
//!
//! The remote table is loosely typed: field names vary in casing and numeric
//! cells may be blank. Every lookup here is explicit and defaults
//! deterministically instead of failing the whole read.

use engine_logging::engine_debug;
use estimator_core::ProjectType;
use serde_json::{Map, Value};

use crate::ConnectError;

const FIELD_NAME: &str = "Name";
const FIELD_NAME_LOWER: &str = "name";
const FIELD_NUM_PROJECTS: &str = "# of Projects";
const FIELD_AVG_COST: &str = "Avg Cost/GSF";
const FIELD_AVG_CHANGE_ORDER: &str = "Avg Change Order %";

/// Parse a success body of the form `{ "records": [ { "id", "fields" } ] }`.
pub fn parse_records_body(body: &[u8]) -> Result<Vec<ProjectType>, ConnectError> {
    let root: Value = serde_json::from_slice(body)
        .map_err(|err| ConnectError::Parse(format!("invalid JSON response: {err}")))?;
    let records = root
        .get("records")
        .and_then(Value::as_array)
        .ok_or_else(|| ConnectError::Parse("response has no records list".to_string()))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            project_type_from_record(record)
                .ok_or_else(|| ConnectError::Parse(format!("record {index} has no id")))
        })
        .collect()
}

/// Map one record. Returns `None` only when the record has no string id.
pub fn project_type_from_record(record: &Value) -> Option<ProjectType> {
    let id = record.get("id").and_then(Value::as_str)?.to_string();
    let empty = Map::new();
    let fields = record
        .get("fields")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let name = non_empty_str(fields, FIELD_NAME)
        .or_else(|| non_empty_str(fields, FIELD_NAME_LOWER))
        .unwrap_or_default()
        .to_string();
    if name.is_empty() {
        engine_debug!("Record {} has no name field", id);
    }

    Some(ProjectType {
        id,
        name,
        num_projects: count_field(fields, FIELD_NUM_PROJECTS),
        avg_cost_per_gsf: number_field(fields, FIELD_AVG_COST)
            .filter(|v| *v >= 0.0)
            .unwrap_or(0.0),
        avg_change_order_percent: number_field(fields, FIELD_AVG_CHANGE_ORDER).unwrap_or(0.0),
    })
}

/// Extract `error.message` from an error body, if present and non-empty.
pub fn parse_error_message(body: &[u8]) -> Option<String> {
    let root: Value = serde_json::from_slice(body).ok()?;
    let message = root.get("error")?.get("message")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_string())
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    fields
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
}

fn count_field(fields: &Map<String, Value>, key: &str) -> u64 {
    let Some(value) = fields.get(key) else {
        return 0;
    };
    if let Some(n) = value.as_u64() {
        return n;
    }
    match value.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 => v.trunc() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_field_truncates_and_rejects_negatives() {
        let fields = json!({ "a": 3, "b": 4.9, "c": -2, "d": "7", "e": null });
        let fields = fields.as_object().unwrap();
        assert_eq!(count_field(fields, "a"), 3);
        assert_eq!(count_field(fields, "b"), 4);
        assert_eq!(count_field(fields, "c"), 0);
        assert_eq!(count_field(fields, "d"), 0);
        assert_eq!(count_field(fields, "e"), 0);
        assert_eq!(count_field(fields, "missing"), 0);
    }

    #[test]
    fn error_message_requires_expected_shape() {
        assert_eq!(
            parse_error_message(br#"{"error":{"message":"Invalid token"}}"#),
            Some("Invalid token".to_string())
        );
        assert_eq!(parse_error_message(br#"{"error":"NOT_FOUND"}"#), None);
        assert_eq!(parse_error_message(br#"{"error":{"message":""}}"#), None);
        assert_eq!(parse_error_message(b"<html>bad gateway</html>"), None);
        assert_eq!(parse_error_message(b""), None);
    }
}
