#![allow(dead_code)] // not every test binary uses every helper

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use csv_rowset::{ColumnKey, Record, Value};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a unique temp file and return its path.
pub fn write_temp(tag: &str, contents: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "csv_rowset_{}_{}_{}.csv",
        std::process::id(),
        tag,
        n
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Build a record from name/value string pairs.
pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (ColumnKey::from(*k), Value::from(*v)))
        .collect()
}
