//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` wraps an `f64` number of simulated time
//! units starting at zero.  Event times are produced by adding sampled
//! intervals to the current time, so they only ever move forward.
//!
//! `SimTime` is totally ordered through `f64::total_cmp`, which lets it key a
//! `BinaryHeap` without a fallible comparator.  Interval sampling never yields
//! NaN for validated configurations.
//!
//! There is exactly one `SimClock` per engine.  Every stage's state-time
//! histogram is charged from that single clock, so the elapsed time between
//! two events is identical for all stages of a network.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute point on the simulated time axis.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Return the time `dt` units after `self`.
    #[inline]
    pub fn offset(self, dt: f64) -> SimTime {
        SimTime(self.0 + dt)
    }

    /// Time units elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.4}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Network-wide simulation clock owned by the engine.
///
/// `current` is the time of the event being processed; `last_event` is the
/// time up to which stage histograms have been charged.  Both only move
/// forward, and outside of [`advance_to`][Self::advance_to] they are equal.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub current:    SimTime,
    pub last_event: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock to `t` and return the time elapsed since the previous
    /// event.  The caller charges that elapsed time to every stage.
    #[inline]
    pub fn advance_to(&mut self, t: SimTime) -> f64 {
        debug_assert!(t >= self.last_event, "clock moved backwards: {t} < {}", self.last_event);
        let elapsed = t - self.last_event;
        self.current = t;
        self.last_event = t;
        elapsed
    }

    /// Total simulated time covered by the accumulated histograms.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.last_event.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}
