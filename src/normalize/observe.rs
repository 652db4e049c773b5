//! Optional reporting hook for parse outcomes.

use crate::error::ParseError;

use super::input::SourceKind;

/// Context about a parse attempt.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Which classification branch the input matched.
    pub source: SourceKind,
}

/// Minimal stats reported on a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of normalized records.
    pub rows: usize,
    /// Number of resolved header columns.
    pub columns: usize,
}

/// Observer interface for parse outcomes.
///
/// Implementors can record metrics or logs. All methods default to no-ops.
pub trait ParseObserver: Send + Sync {
    /// Called when a parse succeeds.
    fn on_success(&self, _ctx: &ParseContext, _stats: ParseStats) {}

    /// Called when a parse fails.
    fn on_failure(&self, _ctx: &ParseContext, _error: &ParseError) {}
}

/// Logs parse events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ParseObserver for StdErrObserver {
    fn on_success(&self, ctx: &ParseContext, stats: ParseStats) {
        eprintln!(
            "[parse][ok] source={:?} rows={} columns={}",
            ctx.source, stats.rows, stats.columns
        );
    }

    fn on_failure(&self, ctx: &ParseContext, error: &ParseError) {
        eprintln!("[parse][err] source={:?} err={}", ctx.source, error);
    }
}
