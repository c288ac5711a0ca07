//! Simulation observer trait for tracing and data collection.

use qs_core::SimClock;
use qs_queue::{Event, QueueStage};

use crate::SimReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — occupancy printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &Event, _clock: &SimClock, stages: &[QueueStage]) {
///         println!("{event}: {} in stage 0", stages[0].customers());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the initial arrival is scheduled.
    fn on_run_start(&mut self, _stages: &[QueueStage]) {}

    /// Called after each event's transition has been applied and its
    /// follow-up events scheduled.
    ///
    /// `stages` reflects the post-event state; `clock.current == event.time`.
    fn on_event(&mut self, _event: &Event, _clock: &SimClock, _stages: &[QueueStage]) {}

    /// Called once when the loop stops, with the final metrics.
    fn on_run_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
