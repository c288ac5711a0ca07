//! Simulation events.

use std::fmt;

use qs_core::{SimTime, StageId};

/// What happens when an event fires.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// External customer arrives at the event's stage.
    Arrival,
    /// Service completes and the customer leaves the network.
    Departure,
    /// Service completes at the entry stage of a tandem and the customer is
    /// offered to the downstream stage at the same instant.
    Passage,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Arrival   => "arrival",
            EventKind::Departure => "departure",
            EventKind::Passage   => "passage",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable scheduled occurrence.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time:  SimTime,
    pub kind:  EventKind,
    /// The stage whose state the event changes first.
    pub stage: StageId,
}

impl Event {
    pub fn new(time: SimTime, kind: EventKind, stage: StageId) -> Self {
        Self { time, kind, stage }
    }

    pub fn arrival(time: SimTime, stage: StageId) -> Self {
        Self::new(time, EventKind::Arrival, stage)
    }

    pub fn departure(time: SimTime, stage: StageId) -> Self {
        Self::new(time, EventKind::Departure, stage)
    }

    pub fn passage(time: SimTime, stage: StageId) -> Self {
        Self::new(time, EventKind::Passage, stage)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.kind, self.stage, self.time)
    }
}
