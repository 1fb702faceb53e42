//! The `OutputWriter` trait implemented by backend writers.

use crate::{EntitySnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// because observer callbacks cannot return them.
pub trait OutputWriter {
    /// Write a batch of entity snapshots.
    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
