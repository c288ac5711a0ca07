//! `EventScheduler` — time-ordered pending event queue.
//!
//! # Ordering
//!
//! Events pop in ascending `time`.  Events with equal times pop in the order
//! they were inserted: every entry carries a sequence number from a
//! monotonically increasing counter, and the heap orders on `(time, seq)`.
//! This keeps runs reproducible when two intervals sum to the same instant.
//!
//! When the draw budget runs out the engine stops popping and calls
//! [`EventScheduler::clear`], which discards every event still pending.
//!
//! `BinaryHeap` gives O(log n) insert and pop.  A network of at most two
//! stages never holds more than `1 + servers_0 + servers_1` pending events,
//! so the heap stays tiny.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use qs_core::{QsError, QsResult, SimTime};

use crate::Event;

/// Heap entry.  `Ord` looks only at `(time, seq)`.
#[derive(Debug)]
struct Scheduled {
    seq:   u64,
    event: Event,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time
            .cmp(&other.event.time)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue of pending events keyed by time.
#[derive(Default, Debug)]
pub struct EventScheduler {
    heap:     BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event`.
    pub fn insert(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled { seq, event }));
    }

    /// Remove and return the earliest event.
    ///
    /// Fails with [`QsError::EmptyQueue`] when nothing is scheduled; callers
    /// are expected to check [`is_empty`][Self::is_empty] first.
    pub fn pop_min(&mut self) -> QsResult<Event> {
        self.heap
            .pop()
            .map(|Reverse(s)| s.event)
            .ok_or(QsError::EmptyQueue)
    }

    /// Time of the earliest event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|Reverse(s)| s.event.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every pending event.  The sequence counter keeps running.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
