//! JSON export.

use crate::error::ParseResult;
use crate::types::Record;

/// Encode records as a JSON array. Records whose keys are purely positional
/// (in order from 0) encode as arrays, everything else as flat objects with
/// stringified keys — see [`Record`]'s `Serialize` impl.
pub fn records_to_json(records: &[Record]) -> ParseResult<String> {
    Ok(serde_json::to_string(records)?)
}

#[cfg(test)]
mod tests {
    use super::records_to_json;
    use crate::types::{ColumnKey, Record, Value};

    #[test]
    fn named_records_encode_as_objects() {
        let records: Vec<Record> = vec![
            [
                (ColumnKey::from("Name"), Value::from("Alice")),
                (ColumnKey::from("Age"), Value::from("30")),
            ]
            .into_iter()
            .collect(),
        ];
        assert_eq!(
            records_to_json(&records).unwrap(),
            r#"[{"Name":"Alice","Age":"30"}]"#
        );
    }

    #[test]
    fn positional_records_encode_as_arrays() {
        let records: Vec<Record> = vec![
            [(ColumnKey::from(0), Value::from("a")), (ColumnKey::from(1), Value::from("b"))]
                .into_iter()
                .collect(),
        ];
        assert_eq!(records_to_json(&records).unwrap(), r#"[["a","b"]]"#);
    }

    #[test]
    fn empty_record_set_encodes_as_empty_array() {
        assert_eq!(records_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn null_and_number_cells() {
        let records: Vec<Record> = vec![
            [
                (ColumnKey::from("n"), Value::Number(1.0)),
                (ColumnKey::from("x"), Value::Null),
            ]
            .into_iter()
            .collect(),
        ];
        assert_eq!(records_to_json(&records).unwrap(), r#"[{"n":1,"x":null}]"#);
    }
}
