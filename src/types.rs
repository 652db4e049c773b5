//! Core data model types.
//!
//! Parsing normalizes raw input into a [`RecordSet`]: an ordered sequence of
//! [`Record`]s, each an ordered mapping from [`ColumnKey`] to [`Value`].

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A single cell value.
///
/// CSV cells are always [`Value::Str`]; numeric coercion happens only at
/// aggregate and JSON boundaries (see [`Value::as_f64`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// Numeric value.
    Number(f64),
    /// UTF-8 string.
    Str(String),
}

impl Value {
    /// Numeric view of the value: numbers directly, strings by parsing
    /// (after trimming). `None` for nulls and non-numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Null => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert a decoded JSON value into the flat cell union.
    ///
    /// Booleans become the strings `"true"`/`"false"`; nested arrays and
    /// objects become their compact JSON text.
    pub(crate) fn from_json(v: &serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Str(b.to_string()),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Str(s.clone()),
            nested => Value::Str(nested.to_string()),
        }
    }
}

/// Integer view of a float that has no fractional part, used so integral
/// numbers render without a trailing `.0` in CSV and JSON output.
fn as_integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&n) {
        Some(n as i64)
    } else {
        None
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Number(n) => match as_integral(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Number(n) => match as_integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

/// Canonical identity of a record field: the header name when present and
/// non-blank, else a synthetic 0-based positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// Named field (from a header cell or a structured element's own key).
    Name(String),
    /// Positional field.
    Index(usize),
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Name(s) => f.write_str(s),
            ColumnKey::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(s: &str) -> Self {
        ColumnKey::Name(s.to_string())
    }
}

impl From<usize> for ColumnKey {
    fn from(i: usize) -> Self {
        ColumnKey::Index(i)
    }
}

/// An ordered mapping from [`ColumnKey`] to [`Value`].
///
/// Insertion follows ordered-array semantics: inserting an existing key
/// overwrites the value **in place** (the key keeps its original position);
/// new keys append. This is what makes duplicate header names collapse
/// last-write-wins during record construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(ColumnKey, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Existing keys are overwritten in place.
    pub fn insert(&mut self, key: ColumnKey, value: Value) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a field by key.
    pub fn get(&self, key: &ColumnKey) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnKey, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// A record whose keys are exactly `Index(0..n)` in order is a "list" and
    /// encodes as a JSON array rather than an object.
    fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == ColumnKey::Index(i))
    }
}

impl FromIterator<(ColumnKey, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (ColumnKey, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
            for (_, value) in &self.entries {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (key, value) in &self.entries {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

/// Ordered sequence of records, replaced wholesale on every parse call.
pub type RecordSet = Vec<Record>;
