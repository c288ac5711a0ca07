//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventTraceRow, OutputResult, StageSummaryRow, StateRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of event trace rows.
    fn write_events(&mut self, rows: &[EventTraceRow]) -> OutputResult<()>;

    /// Write the state distribution of every stage.
    fn write_states(&mut self, rows: &[StateRow]) -> OutputResult<()>;

    /// Write one summary row per stage.
    fn write_summaries(&mut self, rows: &[StageSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
