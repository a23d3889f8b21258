use serde_json::{Map, Value};

/// JSON object as returned by the API, key order preserved.
pub type Record = Map<String, Value>;

/// The row list of a response: a bare array, or the `data` array of a
/// `{ data: [...], total }` envelope. A lone object is one row.
#[must_use]
pub fn extract_rows(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                object.insert("data".to_string(), other);
                vec![Value::Object(object)]
            }
            None => vec![Value::Object(object)],
        },
        Value::Null => Vec::new(),
        other => {
            tracing::debug!(value = %other, "Scalar response has no rows");
            Vec::new()
        }
    }
}

/// Rows of a response as records; non-object rows are skipped.
#[must_use]
pub fn normalize_records(value: Value) -> Vec<Record> {
    extract_rows(value)
        .into_iter()
        .filter_map(|row| match row {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
