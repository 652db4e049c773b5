//! Queries over a parsed record set: row ranges, projection, aggregates.

pub mod aggregate;
pub mod project;
pub mod range;

pub use aggregate::Aggregate;
pub use project::Column;
pub use range::RowRange;
