//! The stateful owner type: configuration, resolved header, record set.

use std::fmt;
use std::sync::Arc;

use crate::error::ParseResult;
use crate::export;
use crate::normalize::header;
use crate::normalize::input::{classify, Input, RawInput};
use crate::normalize::observe::{ParseContext, ParseObserver, ParseStats};
use crate::query::{self, Aggregate, Column, RowRange};
use crate::types::{Record, RecordSet, Value};

/// Options controlling parsing and export behavior.
///
/// Use [`Default`] for common cases:
///
/// - `delimiter`: `','`
/// - `enclosure`: `Some('"')`; `None` disables enclosure handling entirely
///   (no stripping on input, no wrapping on output)
/// - `ignore_header`: `false`
/// - `ignore_header_case`: `true` (header lookup is case-insensitive)
/// - `header_offset`: `0` (which row/element the header comes from)
/// - `header`: `None` (explicit header override)
/// - `observer`: `None`
#[derive(Clone)]
pub struct ParseOptions {
    /// CSV field delimiter.
    pub delimiter: char,
    /// Quote character, or `None` to disable enclosure handling.
    pub enclosure: Option<char>,
    /// Skip header extraction entirely.
    pub ignore_header: bool,
    /// Case-insensitive header lookup in projections.
    pub ignore_header_case: bool,
    /// Row/element index the header is resolved from.
    pub header_offset: usize,
    /// Explicit header override; an empty vec counts as unset.
    pub header: Option<Vec<String>>,
    /// Optional observer notified of parse outcomes.
    pub observer: Option<Arc<dyn ParseObserver>>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            enclosure: Some('"'),
            ignore_header: false,
            ignore_header_case: true,
            header_offset: 0,
            header: None,
            observer: None,
        }
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("delimiter", &self.delimiter)
            .field("enclosure", &self.enclosure)
            .field("ignore_header", &self.ignore_header)
            .field("ignore_header_case", &self.ignore_header_case)
            .field("header_offset", &self.header_offset)
            .field("header", &self.header)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// A normalized row/column dataset.
///
/// `RowSet` owns its configuration and the record set produced by the most
/// recent [`parse`](RowSet::parse) call; the header and records are replaced
/// wholesale on every successful parse. Queries and exports never mutate it.
///
/// Single-owner, single-threaded use is assumed: concurrent mutating calls
/// on one instance require external synchronization.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    options: ParseOptions,
    header: Vec<String>,
    records: RecordSet,
}

impl RowSet {
    /// Create an empty row set with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            header: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Current options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Mutable access to the options. Changes take effect on the next
    /// [`parse`](RowSet::parse) (except projection case-folding and export
    /// rendering, which read the options at call time).
    pub fn options_mut(&mut self) -> &mut ParseOptions {
        &mut self.options
    }

    /// Parse heterogeneous input into a fresh record set.
    ///
    /// Input is classified in order: already-structured data, JSON text,
    /// then a CSV file path (see [`Input`]). The header is resolved under
    /// the configured policy and every remaining row is zipped against it;
    /// rows producing zero fields are dropped.
    pub fn parse(&mut self, input: impl Into<Input>) -> ParseResult<()> {
        let (source, raw) = classify(
            input.into(),
            self.options.delimiter,
            self.options.enclosure,
        );
        let result = raw.and_then(|raw| self.normalize(raw));

        if let Some(observer) = self.options.observer.as_ref() {
            let ctx = ParseContext { source };
            match &result {
                Ok(()) => observer.on_success(
                    &ctx,
                    ParseStats {
                        rows: self.records.len(),
                        columns: self.header.len(),
                    },
                ),
                Err(error) => observer.on_failure(&ctx, error),
            }
        }
        result
    }

    fn normalize(&mut self, raw: RawInput) -> ParseResult<()> {
        let explicit = self.options.header.clone().filter(|h| !h.is_empty());
        let offset = self.options.header_offset;

        let (resolved, records) = match raw {
            RawInput::Structured(rows) => {
                if self.options.ignore_header {
                    // No extraction; elements keep their own keys verbatim.
                    let records = rows
                        .iter()
                        .map(header::keyed_record)
                        .filter(|r| !r.is_empty())
                        .collect();
                    (explicit.unwrap_or_default(), records)
                } else {
                    let resolved = header::resolve_structured(explicit, &rows, offset)?;
                    // The header element stays in the data; every element is
                    // re-keyed positionally against the resolved header.
                    let records = rows
                        .iter()
                        .map(|row| header::zip_row(&resolved, header::element_fields(row)))
                        .filter(|r| !r.is_empty())
                        .collect();
                    (resolved, records)
                }
            }
            RawInput::Rows(mut rows) => {
                let resolved = if self.options.ignore_header {
                    // Explicit header (if any) acts as a positional rename
                    // map; otherwise rows stay position-keyed.
                    explicit.unwrap_or_default()
                } else {
                    header::resolve_rows(explicit, &mut rows, offset)?
                };
                let records = rows
                    .into_iter()
                    .map(|row| header::zip_row(&resolved, row))
                    .filter(|r| !r.is_empty())
                    .collect();
                (resolved, records)
            }
        };

        self.header = resolved;
        self.records = records;
        Ok(())
    }

    /// The resolved header, in canonical order. Empty for position-keyed
    /// record sets.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of resolved header columns.
    pub fn header_count(&self) -> usize {
        self.header.len()
    }

    /// The normalized records of the last parse.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of normalized records.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Select columns (by name or 1-based position), optionally limited to a
    /// [`RowRange`]. Empty `columns` selects everything. Output rows carry
    /// the caller's requested column order and casing.
    pub fn project(&self, columns: &[Column], range: Option<RowRange>) -> ParseResult<RecordSet> {
        query::project::project(
            &self.header,
            &self.records,
            columns,
            range,
            self.options.ignore_header_case,
        )
    }

    /// Reduce one column across the full record set.
    pub fn aggregate(&self, column: impl Into<Column>, op: Aggregate) -> ParseResult<Value> {
        query::aggregate::aggregate(
            &self.header,
            &self.records,
            column.into(),
            op,
            self.options.ignore_header_case,
        )
    }

    /// Sum of a column's numeric values; `Number(0.0)` for an empty column.
    pub fn sum(&self, column: impl Into<Column>) -> ParseResult<Value> {
        self.aggregate(column, Aggregate::Sum)
    }

    /// Minimum numeric value of a column; `Null` when nothing coerces.
    pub fn min(&self, column: impl Into<Column>) -> ParseResult<Value> {
        self.aggregate(column, Aggregate::Min)
    }

    /// Maximum numeric value of a column; `Null` when nothing coerces.
    pub fn max(&self, column: impl Into<Column>) -> ParseResult<Value> {
        self.aggregate(column, Aggregate::Max)
    }

    /// Mean of a column's numeric values; `Number(0.0)` for an empty column.
    pub fn average(&self, column: impl Into<Column>) -> ParseResult<Value> {
        self.aggregate(column, Aggregate::Average)
    }

    /// Export the (projected, optionally range-limited) records as JSON.
    pub fn to_json(&self, columns: &[Column], range: Option<RowRange>) -> ParseResult<String> {
        let projected = self.project(columns, range)?;
        export::records_to_json(&projected)
    }

    /// Export the (projected, optionally range-limited) records as CSV text.
    pub fn to_csv(&self, columns: &[Column], range: Option<RowRange>) -> ParseResult<String> {
        let projected = self.project(columns, range)?;
        Ok(export::records_to_csv(
            &projected,
            &self.header,
            columns,
            self.options.delimiter,
            self.options.enclosure,
        ))
    }
}
