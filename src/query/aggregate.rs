//! Aggregate reductions over a single column.

use crate::error::ParseResult;
use crate::types::{Record, Value};

use super::project::{project, Column};

/// Built-in aggregate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Sum of the column's numeric values.
    Sum,
    /// Minimum numeric value.
    Min,
    /// Maximum numeric value.
    Max,
    /// Mean of the column's numeric values.
    Average,
}

/// Reduce one column across the full record set.
///
/// The column is projected (never range-limited) and each value coerced to
/// `f64` where possible; values that do not coerce are skipped. `Sum` and
/// `Average` of an empty column are `Number(0.0)` — the reduction of an
/// empty sum. `Min`/`Max` with nothing to compare are `Null`.
pub(crate) fn aggregate(
    header: &[String],
    records: &[Record],
    column: Column,
    op: Aggregate,
    ignore_case: bool,
) -> ParseResult<Value> {
    let projected = project(header, records, std::slice::from_ref(&column), None, ignore_case)?;
    let numbers: Vec<f64> = projected
        .iter()
        .filter_map(|record| record.values().next().and_then(Value::as_f64))
        .collect();

    Ok(match op {
        Aggregate::Sum => Value::Number(numbers.iter().sum()),
        Aggregate::Average => {
            if numbers.is_empty() {
                Value::Number(0.0)
            } else {
                Value::Number(numbers.iter().sum::<f64>() / numbers.len() as f64)
            }
        }
        Aggregate::Min => numbers
            .iter()
            .copied()
            .reduce(f64::min)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Aggregate::Max => numbers
            .iter()
            .copied()
            .reduce(f64::max)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    })
}
