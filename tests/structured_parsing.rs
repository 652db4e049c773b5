mod common;

use std::sync::{Arc, Mutex};

use common::record;
use csv_rowset::normalize::{ParseContext, ParseObserver, ParseStats};
use csv_rowset::{ParseError, ParseOptions, RowSet, SourceKind, Value};

#[test]
fn json_text_array_of_objects() {
    let mut rs = RowSet::default();
    rs.parse(r#"[{"Name":"Alice","Age":"30"},{"Name":"Bob","Age":"25"}]"#)
        .unwrap();

    assert_eq!(rs.header(), ["Name", "Age"]);
    assert_eq!(rs.row_count(), 2);
    assert_eq!(rs.records()[0], record(&[("Name", "Alice"), ("Age", "30")]));
    assert_eq!(rs.sum("Age").unwrap(), Value::Number(55.0));
}

#[test]
fn structured_value_input() {
    let mut rs = RowSet::default();
    rs.parse(serde_json::json!([
        {"id": 1, "name": "a"},
        {"id": 2, "name": "b"},
    ]))
    .unwrap();

    assert_eq!(rs.header(), ["id", "name"]);
    assert_eq!(rs.records()[0].get(&"id".into()), Some(&Value::Number(1.0)));
    assert_eq!(rs.records()[1].get(&"name".into()), Some(&Value::from("b")));
}

#[test]
fn header_element_stays_in_the_data() {
    // Structured input is inspected for keys, not consumed: the element at
    // the header offset remains a record.
    let mut rs = RowSet::default();
    rs.parse(serde_json::json!([{"a": 1}, {"a": 2}])).unwrap();
    assert_eq!(rs.row_count(), 2);
}

#[test]
fn structured_rows_are_rekeyed_positionally() {
    // The second element's own key is ignored; fields map by position
    // against the header taken from the first element.
    let mut rs = RowSet::default();
    rs.parse(serde_json::json!([{"a": 1}, {"other": 2}])).unwrap();

    assert_eq!(rs.header(), ["a"]);
    assert_eq!(rs.records()[1].get(&"a".into()), Some(&Value::Number(2.0)));
}

#[test]
fn mapping_values_are_the_rows() {
    let mut rs = RowSet::default();
    rs.parse(serde_json::json!({
        "r1": {"Name": "Alice"},
        "r2": {"Name": "Bob"},
    }))
    .unwrap();

    assert_eq!(rs.header(), ["Name"]);
    assert_eq!(rs.row_count(), 2);
}

#[test]
fn scalar_structured_value_is_invalid_input() {
    let mut rs = RowSet::default();
    let err = rs.parse(serde_json::json!("just a string")).unwrap_err();
    assert!(matches!(err, ParseError::InvalidInput { .. }));
    assert!(err.to_string().contains("invalid input"));
}

#[test]
fn scalar_json_text_is_treated_as_a_path() {
    let mut rs = RowSet::default();
    let err = rs.parse("42").unwrap_err();
    assert!(matches!(err, ParseError::FileNotFound { .. }));
}

#[test]
fn empty_array_parses_to_an_empty_record_set() {
    let mut rs = RowSet::default();
    rs.parse("[]").unwrap();
    assert_eq!(rs.row_count(), 0);
    assert!(rs.header().is_empty());
}

#[test]
fn header_offset_out_of_range_for_structured_input() {
    let mut rs = RowSet::new(ParseOptions {
        header_offset: 7,
        ..Default::default()
    });
    let err = rs.parse(serde_json::json!([{"a": 1}])).unwrap_err();
    assert!(matches!(err, ParseError::HeaderNotFound { offset: 7 }));
}

#[test]
fn ignore_header_preserves_each_elements_own_keys() {
    let mut rs = RowSet::new(ParseOptions {
        ignore_header: true,
        ..Default::default()
    });
    rs.parse(serde_json::json!([
        {"a": "1"},
        {"b": "2", "c": "3"},
    ]))
    .unwrap();

    assert!(rs.header().is_empty());
    assert_eq!(rs.records()[0], record(&[("a", "1")]));
    assert_eq!(rs.records()[1], record(&[("b", "2"), ("c", "3")]));
}

#[test]
fn scalar_elements_produce_empty_records_and_are_dropped() {
    let mut rs = RowSet::default();
    rs.parse(serde_json::json!([{"a": 1}, "loose scalar", {"a": 3}]))
        .unwrap();
    assert_eq!(rs.row_count(), 2);
}

#[test]
fn json_value_coercion() {
    let mut rs = RowSet::default();
    rs.parse(serde_json::json!([
        {"b": true, "n": null, "nested": {"x": 1}},
    ]))
    .unwrap();

    let rec = &rs.records()[0];
    assert_eq!(rec.get(&"b".into()), Some(&Value::from("true")));
    assert_eq!(rec.get(&"n".into()), Some(&Value::Null));
    assert_eq!(rec.get(&"nested".into()), Some(&Value::from(r#"{"x":1}"#)));
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl ParseObserver for RecordingObserver {
    fn on_success(&self, ctx: &ParseContext, stats: ParseStats) {
        self.events
            .lock()
            .unwrap()
            .push(format!("ok {:?} rows={}", ctx.source, stats.rows));
    }

    fn on_failure(&self, ctx: &ParseContext, error: &ParseError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("err {:?} {error}", ctx.source));
    }
}

#[test]
fn observer_sees_success_and_failure() {
    let observer = Arc::new(RecordingObserver::default());
    let mut rs = RowSet::new(ParseOptions {
        observer: Some(observer.clone()),
        ..Default::default()
    });

    rs.parse(r#"[{"a":1}]"#).unwrap();
    let _ = rs.parse("tests/fixtures/does_not_exist.csv").unwrap_err();

    let events = observer.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].starts_with(&format!("ok {:?}", SourceKind::Json)));
    assert!(events[1].contains("not found"));
}
