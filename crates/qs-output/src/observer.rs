//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use qs_core::SimClock;
use qs_queue::{Event, QueueStage};
use qs_sim::{SimObserver, SimReport};

use crate::row::{EventTraceRow, StageSummaryRow, StateRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// Default number of trace rows buffered between writes.
const DEFAULT_FLUSH_EVERY: usize = 4_096;

/// A [`SimObserver`] that writes an event trace and the final report to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    trace:       bool,
    flush_every: usize,
    buffer:      Vec<EventTraceRow>,
    seq:         u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that records every event.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            trace:       true,
            flush_every: DEFAULT_FLUSH_EVERY,
            buffer:      Vec::new(),
            seq:         0,
            last_error:  None,
        }
    }

    /// Write only the final report, no per-event trace.
    pub fn without_trace(mut self) -> Self {
        self.trace = false;
        self
    }

    /// Buffer at most `n` trace rows between writes (minimum 1).
    pub fn flush_every(mut self, n: usize) -> Self {
        self.flush_every = n.max(1);
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &Event, clock: &SimClock, stages: &[QueueStage]) {
        if !self.trace {
            return;
        }
        self.buffer.push(EventTraceRow::new(self.seq, event, clock, stages));
        self.seq += 1;
        if self.buffer.len() >= self.flush_every {
            self.flush_buffer();
        }
    }

    fn on_run_end(&mut self, report: &SimReport) {
        self.flush_buffer();

        let result = self.writer.write_states(&StateRow::from_report(report));
        self.store_err(result);
        let result = self.writer.write_summaries(&StageSummaryRow::from_report(report));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
