//! Response Normalizer
//!
//! Turns a decoded payload of unknown shape into a clean record collection.
//!
//! The API is not consistent about how it wraps or encodes collections:
//! - the collection may be a bare array or a paginated `{"results": [...]}` envelope
//! - sequence fields (team `members`) may arrive as JSON-encoded text
//!
//! Nothing in this module fails. Malformed content degrades to empty
//! collections or empty fields and is reported through `tracing`.

use crate::models::Resource;
use serde_json::Value;

/// Extract the candidate collection from a payload
///
/// Bare arrays are used as-is, objects contribute their `results` array,
/// every other shape yields an empty collection.
pub fn extract_collection(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                tracing::warn!(
                    "Paginated envelope carries a non-array `results` ({}), treating as empty",
                    json_kind(&other)
                );
                Vec::new()
            }
            None => {
                tracing::warn!("Payload object has no `results` field, treating as empty");
                Vec::new()
            }
        },
        other => {
            tracing::warn!("Unexpected payload shape ({}), treating as empty", json_kind(&other));
            Vec::new()
        }
    }
}

/// Force the named fields of a record into native arrays
///
/// Strings are decoded as JSON and kept only when they hold an array.
/// Anything else that is not an array, including an absent field, becomes
/// `[]`. Array items are coerced to strings: numbers and booleans are
/// stringified, nulls and nested values are dropped. Non-object records are
/// left as they are.
pub fn repair_sequence_fields(record: &mut Value, fields: &[&str], label: &str) {
    let Some(object) = record.as_object_mut() else {
        return;
    };

    for &field in fields {
        let repaired = match object.remove(field) {
            Some(Value::Array(items)) => clean_sequence(items, field, label),
            Some(Value::String(text)) => match decode_embedded_sequence(&text, field, label) {
                Value::Array(items) => clean_sequence(items, field, label),
                other => other,
            },
            Some(Value::Null) | None => Value::Array(Vec::new()),
            Some(other) => {
                tracing::warn!(
                    record = %label,
                    field,
                    "Expected a sequence, found {}; using an empty list",
                    json_kind(&other)
                );
                Value::Array(Vec::new())
            }
        };
        object.insert(field.to_string(), repaired);
    }
}

fn clean_sequence(items: Vec<Value>, field: &str, label: &str) -> Value {
    let total = items.len();
    let cleaned: Vec<Value> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(Value::String(text)),
            Value::Number(n) => Some(Value::String(n.to_string())),
            Value::Bool(b) => Some(Value::String(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
        .collect();

    if cleaned.len() < total {
        tracing::warn!(
            record = %label,
            field,
            dropped = total - cleaned.len(),
            "Dropped sequence items that are not identifiers"
        );
    }

    Value::Array(cleaned)
}

fn decode_embedded_sequence(text: &str, field: &str, label: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Value::Array(items),
        Ok(other) => {
            tracing::warn!(
                record = %label,
                field,
                "Embedded JSON is {}, not a sequence; using an empty list",
                json_kind(&other)
            );
            Value::Array(Vec::new())
        }
        Err(e) => {
            tracing::warn!(
                record = %label,
                field,
                error = %e,
                "Error parsing embedded JSON; using an empty list"
            );
            Value::Array(Vec::new())
        }
    }
}

/// Normalize a payload into the raw records of resource `R`
pub fn normalize<R: Resource>(payload: Value) -> Vec<Value> {
    let mut records = extract_collection(payload);

    if !R::SEQUENCE_FIELDS.is_empty() {
        for record in &mut records {
            let label = R::label(record);
            repair_sequence_fields(record, R::SEQUENCE_FIELDS, &label);
        }
    }

    tracing::debug!(resource = R::NAME, count = records.len(), "Normalized payload");
    records
}

/// Decode normalized records into typed values
///
/// Every record yields exactly one value. Fields that are null or of the wrong
/// type take their defaults; a record that is not an object at all decodes to
/// `R::default()` and is logged.
pub fn decode_records<R: Resource>(records: Vec<Value>) -> Vec<R> {
    records
        .into_iter()
        .map(|record| {
            let label = R::label(&record);
            serde_json::from_value::<R>(record).unwrap_or_else(|e| {
                tracing::warn!(
                    resource = R::NAME,
                    record = %label,
                    error = %e,
                    "Record does not match the schema, using an empty record"
                );
                R::default()
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
