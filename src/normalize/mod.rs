//! Input normalization: classification, tokenization, and header resolution.
//!
//! [`crate::RowSet::parse`] drives this module:
//!
//! - [`input`] classifies raw input (structured value / JSON text / file
//!   path) and produces raw rows
//! - [`tokenizer`] splits raw CSV lines into trimmed, unquoted fields
//! - [`header`] resolves the header under the configured policy and zips
//!   rows into [`crate::types::Record`]s
//! - [`observe`] is an optional reporting hook for parse outcomes

pub mod header;
pub mod input;
pub mod observe;
pub mod tokenizer;

pub use input::{Input, SourceKind};
pub use observe::{ParseContext, ParseObserver, ParseStats, StdErrObserver};
