//! `csv-rowset` is a small library for normalizing heterogeneous tabular
//! input — already-structured values, JSON text, or CSV files — into an
//! in-memory [`types::RecordSet`] that can be sliced, aggregated, and
//! re-exported as records, JSON, or CSV.
//!
//! The interesting part is header resolution: given ambiguous or absent
//! header information, [`RowSet::parse`] decides how raw rows map to named
//! or positional fields (offset-based header detection, case-insensitive
//! lookup, duplicate-name collapsing, positional fallback for blank header
//! cells), and queries resolve column references against that header.
//!
//! ## Quick example: JSON text in, queries out
//!
//! ```rust
//! use csv_rowset::{RowSet, Value};
//!
//! # fn main() -> Result<(), csv_rowset::ParseError> {
//! let mut rs = RowSet::default();
//! rs.parse(r#"[{"Name":"Alice","Age":"30"},{"Name":"Bob","Age":"25"}]"#)?;
//!
//! assert_eq!(rs.row_count(), 2);
//! assert_eq!(rs.header(), ["Name", "Age"]);
//! assert_eq!(rs.sum("Age")?, Value::Number(55.0));
//! assert_eq!(
//!     rs.to_json(&[], None)?,
//!     r#"[{"Name":"Alice","Age":"30"},{"Name":"Bob","Age":"25"}]"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## CSV files
//!
//! A plain string that is not JSON is treated as a file path; the first line
//! (or the line at `header_offset`) becomes the header:
//!
//! ```no_run
//! use csv_rowset::{ParseOptions, RowSet};
//!
//! # fn main() -> Result<(), csv_rowset::ParseError> {
//! let mut rs = RowSet::new(ParseOptions {
//!     delimiter: ';',
//!     ..Default::default()
//! });
//! rs.parse("people.csv")?;
//! println!("{} rows, header {:?}", rs.row_count(), rs.header());
//! # Ok(())
//! # }
//! ```
//!
//! ## Projection and row ranges
//!
//! Projection preserves the caller's column order and casing; a
//! [`RowRange`] is an explicit parameter on export calls, built from
//! inclusive 1-based bounds:
//!
//! ```rust
//! use csv_rowset::{RowRange, RowSet};
//!
//! # fn main() -> Result<(), csv_rowset::ParseError> {
//! let mut rs = RowSet::default();
//! rs.parse(serde_json::json!([
//!     {"Name": "Alice", "Age": "30"},
//!     {"Name": "Bob", "Age": "25"},
//!     {"Name": "Carol", "Age": "41"},
//! ]))?;
//!
//! // Case-insensitive lookup, requested order and casing win.
//! let out = rs.project(&["age".into(), "name".into()], RowRange::new(2, 3))?;
//! assert_eq!(out.len(), 2);
//! assert_eq!(
//!     rs.to_csv(&["name".into()], Some(RowRange::first(1)))?,
//!     "\"name\"\n\"Alice\"\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: input classification, tokenization, header resolution
//! - [`query`]: row ranges, projection, aggregates
//! - [`export`]: JSON and CSV rendering
//! - [`types`]: the value/record data model
//! - [`rowset`]: the stateful [`RowSet`] owner type
//! - [`error`]: the error type shared across all of the above

pub mod error;
pub mod export;
pub mod normalize;
pub mod query;
pub mod rowset;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use normalize::{Input, ParseObserver, SourceKind, StdErrObserver};
pub use query::{Aggregate, Column, RowRange};
pub use rowset::{ParseOptions, RowSet};
pub use types::{ColumnKey, Record, RecordSet, Value};
