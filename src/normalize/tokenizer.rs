//! Raw-line tokenization.
//!
//! Lines are split on the configured delimiter with no quote protection:
//! an embedded delimiter splits the field even inside an enclosure. Each
//! field is whitespace-trimmed, then one leading and one trailing enclosure
//! character are stripped (unless enclosure handling is disabled).

use crate::types::Value;

/// Tokenize one line into field values.
pub(crate) fn tokenize_line(line: &str, delimiter: char, enclosure: Option<char>) -> Vec<Value> {
    line.split(delimiter)
        .map(|field| Value::Str(clean_field(field, enclosure).to_string()))
        .collect()
}

fn clean_field(field: &str, enclosure: Option<char>) -> &str {
    let mut field = field.trim();
    if let Some(quote) = enclosure {
        if let Some(rest) = field.strip_prefix(quote) {
            field = rest;
        }
        if let Some(rest) = field.strip_suffix(quote) {
            field = rest;
        }
    }
    field
}
