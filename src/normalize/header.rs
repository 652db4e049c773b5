//! Header resolution and record construction.
//!
//! The resolution policy differs by source:
//!
//! - structured elements carry their own keys, so the header is *inspected*
//!   (taken from the element at the configured offset) and the element stays
//!   in the data;
//! - raw CSV rows have no keys, so the header row is *consumed* (removed
//!   from the data), or — when a header was set explicitly — the row at the
//!   offset is discarded as a now-redundant header line.

use crate::error::{ParseError, ParseResult};
use crate::types::{ColumnKey, Record, Value};

/// Resolve the header for structured input.
///
/// An explicit header wins. Otherwise the keys of the element at `offset`
/// become the header (objects contribute their keys, arrays their
/// stringified indices). Empty input resolves to an empty header.
pub(crate) fn resolve_structured(
    explicit: Option<Vec<String>>,
    rows: &[serde_json::Value],
    offset: usize,
) -> ParseResult<Vec<String>> {
    if let Some(header) = explicit {
        return Ok(header);
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    match rows.get(offset) {
        Some(element) => Ok(element_keys(element)),
        None => Err(ParseError::HeaderNotFound { offset }),
    }
}

/// Resolve the header for raw CSV rows, removing the header row from the
/// data. With an explicit header, the row at `offset` is discarded if
/// present; without one, a missing offset is an error.
pub(crate) fn resolve_rows(
    explicit: Option<Vec<String>>,
    rows: &mut Vec<Vec<Value>>,
    offset: usize,
) -> ParseResult<Vec<String>> {
    if let Some(header) = explicit {
        if offset < rows.len() {
            rows.remove(offset);
        }
        return Ok(header);
    }
    if offset < rows.len() {
        let row = rows.remove(offset);
        Ok(row.into_iter().map(|cell| cell.to_string()).collect())
    } else {
        Err(ParseError::HeaderNotFound { offset })
    }
}

fn element_keys(element: &serde_json::Value) -> Vec<String> {
    match element {
        serde_json::Value::Object(map) => map.keys().cloned().collect(),
        serde_json::Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Field values of a structured element in positional order, for re-keying
/// against a resolved header. Scalars contribute no fields.
pub(crate) fn element_fields(element: &serde_json::Value) -> Vec<Value> {
    match element {
        serde_json::Value::Object(map) => map.values().map(Value::from_json).collect(),
        serde_json::Value::Array(items) => items.iter().map(Value::from_json).collect(),
        _ => Vec::new(),
    }
}

/// Zip a raw row against the header by position.
///
/// A blank (or absent) header cell makes the field fall back to a positional
/// key — the number of fields already assigned to the record, so duplicate
/// header names shift later positional keys. Duplicate names collapse
/// last-write-wins at the first occurrence's position.
pub(crate) fn zip_row(header: &[String], fields: impl IntoIterator<Item = Value>) -> Record {
    let mut record = Record::new();
    for (i, value) in fields.into_iter().enumerate() {
        match header.get(i) {
            Some(name) if !name.is_empty() => record.insert(ColumnKey::Name(name.clone()), value),
            _ => record.insert(ColumnKey::Index(record.len()), value),
        }
    }
    record
}

/// Keep a structured element's own keys verbatim (ignore-header mode).
pub(crate) fn keyed_record(element: &serde_json::Value) -> Record {
    let mut record = Record::new();
    match element {
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                record.insert(ColumnKey::Name(key.clone()), Value::from_json(value));
            }
        }
        serde_json::Value::Array(items) => {
            for (i, value) in items.iter().enumerate() {
                record.insert(ColumnKey::Index(i), Value::from_json(value));
            }
        }
        _ => {}
    }
    record
}
