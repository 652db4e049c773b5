//! Input classification.
//!
//! Raw input is accepted in two outer shapes ([`Input`]) and classified into
//! one of three sources, first match wins:
//!
//! 1. an already-structured value (mapping or sequence of mappings)
//! 2. text that decodes as a JSON mapping/sequence
//! 3. other text, treated as a path to a line-oriented CSV file
//!
//! Text that decodes to a JSON *scalar* is not treated as JSON; it falls
//! through to the path branch.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ParseError, ParseResult};
use crate::types::Value;

use super::tokenizer;

/// Raw input accepted by [`crate::RowSet::parse`].
#[derive(Debug, Clone)]
pub enum Input {
    /// Already-structured data: an ordered mapping or a sequence of
    /// ordered mappings.
    Value(serde_json::Value),
    /// Text: either JSON or a path to a CSV file.
    Text(String),
}

impl From<serde_json::Value> for Input {
    fn from(v: serde_json::Value) -> Self {
        Input::Value(v)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<&Path> for Input {
    fn from(p: &Path) -> Self {
        Input::Text(p.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for Input {
    fn from(p: PathBuf) -> Self {
        Input::Text(p.to_string_lossy().into_owned())
    }
}

/// Which classification branch an input matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// An in-memory structured value.
    Structured,
    /// Text recognized as JSON.
    Json,
    /// Text treated as a CSV file path.
    File(PathBuf),
}

/// Classified raw rows, before header resolution.
pub(crate) enum RawInput {
    /// Pre-keyed elements (objects keep their keys, arrays are positional).
    Structured(Vec<serde_json::Value>),
    /// Tokenized CSV lines.
    Rows(Vec<Vec<Value>>),
}

/// Classify input and produce raw rows. The classification branch is always
/// determined, even when producing the rows fails.
pub(crate) fn classify(
    input: Input,
    delimiter: char,
    enclosure: Option<char>,
) -> (SourceKind, ParseResult<RawInput>) {
    match input {
        Input::Value(v) => (
            SourceKind::Structured,
            structured_rows(v).map(RawInput::Structured),
        ),
        Input::Text(text) => {
            if let Some(v) = decode_json(&text) {
                (SourceKind::Json, structured_rows(v).map(RawInput::Structured))
            } else {
                let path = PathBuf::from(text);
                let rows = read_rows(&path, delimiter, enclosure).map(RawInput::Rows);
                (SourceKind::File(path), rows)
            }
        }
    }
}

fn decode_json(text: &str) -> Option<serde_json::Value> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(v @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => Some(v),
        _ => None,
    }
}

/// Elements of a structured input: an array contributes its items, a mapping
/// contributes its values. Anything else is unsupported.
fn structured_rows(v: serde_json::Value) -> ParseResult<Vec<serde_json::Value>> {
    match v {
        serde_json::Value::Array(items) => Ok(items),
        serde_json::Value::Object(map) => Ok(map.into_iter().map(|(_, v)| v).collect()),
        other => Err(ParseError::InvalidInput {
            message: format!(
                "expected a mapping or a sequence of mappings, got {}",
                json_kind(&other)
            ),
        }),
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Read a CSV file as raw rows. Blank lines are discarded before
/// tokenization.
fn read_rows(path: &Path, delimiter: char, enclosure: Option<char>) -> ParseResult<Vec<Vec<Value>>> {
    if !path.is_file() {
        return Err(ParseError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ParseError::FileNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => ParseError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ParseError::Io(e),
    })?;

    Ok(text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| tokenizer::tokenize_line(line, delimiter, enclosure))
        .collect())
}
