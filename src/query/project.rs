//! Column projection.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ParseError, ParseResult};
use crate::types::{ColumnKey, Record, RecordSet, Value};

use super::range::RowRange;

/// A requested projection column: a header name, or a 1-based position
/// (`0` also addresses the first field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// Lookup by header name (case-folded when configured).
    Name(String),
    /// Lookup by position; only valid against a header-less record set.
    Position(usize),
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Name(s) => f.write_str(s),
            Column::Position(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Column {
    fn from(s: &str) -> Self {
        Column::Name(s.to_string())
    }
}

impl From<String> for Column {
    fn from(s: String) -> Self {
        Column::Name(s)
    }
}

impl From<usize> for Column {
    fn from(n: usize) -> Self {
        Column::Position(n)
    }
}

/// Select a subset of columns from `records`, optionally range-limited.
///
/// With no columns, the (limited) records are returned unchanged. Otherwise
/// each requested column resolves against the header (or, for a header-less
/// set, against the first limited row), and output rows carry the caller's
/// requested order and casing. A cell missing from a row projects as
/// [`Value::Null`].
pub(crate) fn project(
    header: &[String],
    records: &[Record],
    columns: &[Column],
    range: Option<RowRange>,
    ignore_case: bool,
) -> ParseResult<RecordSet> {
    let limited = match range {
        Some(r) => r.slice(records),
        None => records,
    };
    if columns.is_empty() {
        return Ok(limited.to_vec());
    }

    let selected = if header.is_empty() {
        resolve_positions(limited, columns)?
    } else {
        resolve_names(header, columns, ignore_case)?
    };

    Ok(limited
        .iter()
        .map(|record| {
            selected
                .iter()
                .map(|(out_key, source)| {
                    let value = record.get(source).cloned().unwrap_or(Value::Null);
                    (out_key.clone(), value)
                })
                .collect()
        })
        .collect())
}

/// Resolve requested names against a non-empty header. The lookup folds case
/// when configured, with later duplicate header names overwriting earlier
/// ones. Output keys preserve the caller's casing.
fn resolve_names(
    header: &[String],
    columns: &[Column],
    ignore_case: bool,
) -> ParseResult<Vec<(ColumnKey, ColumnKey)>> {
    let fold = |name: &str| {
        if ignore_case {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    };

    let mut lookup: HashMap<String, &String> = HashMap::with_capacity(header.len());
    for name in header {
        lookup.insert(fold(name), name);
    }

    columns
        .iter()
        .map(|column| match column {
            Column::Name(requested) => match lookup.get(&fold(requested)) {
                Some(canonical) => Ok((
                    ColumnKey::Name(requested.clone()),
                    ColumnKey::Name((*canonical).clone()),
                )),
                None => Err(ParseError::ColumnNotFound {
                    column: requested.clone(),
                }),
            },
            // Positions are not valid against a named header.
            Column::Position(n) => Err(ParseError::ColumnNotFound {
                column: n.to_string(),
            }),
        })
        .collect()
}

/// Resolve requested positions against a header-less record set: `0` is the
/// first field, anything else is 1-based. The converted index must exist in
/// the first row of the limited data.
fn resolve_positions(
    limited: &[Record],
    columns: &[Column],
) -> ParseResult<Vec<(ColumnKey, ColumnKey)>> {
    let first = limited.first();

    columns
        .iter()
        .map(|column| match column {
            Column::Position(n) => {
                let idx = if *n == 0 { 0 } else { n - 1 };
                let exists = first.is_some_and(|row| row.get(&ColumnKey::Index(idx)).is_some());
                if exists {
                    Ok((ColumnKey::Index(idx), ColumnKey::Index(idx)))
                } else {
                    Err(ParseError::ColumnNotFound {
                        column: idx.to_string(),
                    })
                }
            }
            Column::Name(name) => Err(ParseError::ColumnNotFound {
                column: name.clone(),
            }),
        })
        .collect()
}
