//! CSV export.
//!
//! Output is not escaped: every header cell and field is wrapped in the
//! enclosure character (when enabled) and embedded delimiter or enclosure
//! characters pass through as-is. Lines are `\n`-terminated.

use crate::query::Column;
use crate::types::Record;

/// Render projected records as CSV text.
///
/// An empty projection renders as an empty string. When the header is
/// non-empty, one header line comes first: the caller-supplied column order
/// if `requested` is non-empty, else the canonical header order.
pub fn records_to_csv(
    records: &[Record],
    header: &[String],
    requested: &[Column],
    delimiter: char,
    enclosure: Option<char>,
) -> String {
    let mut out = String::new();
    if records.is_empty() {
        return out;
    }
    let sep = delimiter.to_string();

    if !header.is_empty() {
        let cells: Vec<String> = if requested.is_empty() {
            header.iter().map(|name| wrap(name, enclosure)).collect()
        } else {
            requested
                .iter()
                .map(|column| wrap(&column.to_string(), enclosure))
                .collect()
        };
        out.push_str(&cells.join(&sep));
        out.push('\n');
    }

    for record in records {
        let cells: Vec<String> = record
            .values()
            .map(|value| wrap(&value.to_string(), enclosure))
            .collect();
        out.push_str(&cells.join(&sep));
        out.push('\n');
    }
    out
}

fn wrap(cell: &str, enclosure: Option<char>) -> String {
    match enclosure {
        Some(quote) => format!("{quote}{cell}{quote}"),
        None => cell.to_string(),
    }
}
