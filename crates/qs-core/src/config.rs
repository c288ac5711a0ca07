//! Stage and run configuration.
//!
//! These are plain data consumed once when an engine is built.  The engine
//! itself trusts them; [`StageConfig::validate`] is called by the builder so
//! malformed input surfaces as [`QsError::InvalidConfiguration`] before the
//! first event.

use crate::{QsError, QsResult};

// ── Interval ──────────────────────────────────────────────────────────────────

/// Bounds of a uniform interval `[min, max)`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// `(0, 0)`: the stage has no independent external arrival process.
    pub const NONE: Interval = Interval { min: 0.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    /// Map a variate `u` in `[0, 1)` onto the interval.
    ///
    /// The result stays below `max` even when rounding of `(max - min) * u`
    /// would land on it.  A degenerate interval (`min == max`) yields `min`.
    #[inline]
    pub fn sample(&self, u: f64) -> f64 {
        let v = self.min + (self.max - self.min) * u;
        if v >= self.max && self.max > self.min {
            f64::from_bits(self.max.to_bits() - 1).max(self.min)
        } else {
            v
        }
    }

    fn validate(&self, what: &str) -> QsResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(QsError::InvalidConfiguration(format!(
                "{what} interval bounds must be finite, got ({}, {})",
                self.min, self.max
            )));
        }
        if self.min < 0.0 || self.min > self.max {
            return Err(QsError::InvalidConfiguration(format!(
                "{what} interval must satisfy 0 <= min <= max, got ({}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Interval {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

// ── StageConfig ───────────────────────────────────────────────────────────────

/// Fixed parameters of one service station.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageConfig {
    /// Number of parallel servers.  At least 1.
    pub servers:  u32,
    /// Maximum customers resident (in service plus waiting).  At least `servers`.
    pub capacity: u32,
    /// Interarrival interval, or [`Interval::NONE`] for a downstream stage.
    pub arrivals: Interval,
    /// Service time interval.
    pub service:  Interval,
}

impl StageConfig {
    pub fn new(
        servers:  u32,
        capacity: u32,
        arrivals: impl Into<Interval>,
        service:  impl Into<Interval>,
    ) -> Self {
        Self {
            servers,
            capacity,
            arrivals: arrivals.into(),
            service:  service.into(),
        }
    }

    /// Same stage, different arrival process.
    pub fn with_arrivals(self, arrivals: impl Into<Interval>) -> Self {
        Self { arrivals: arrivals.into(), ..self }
    }

    /// `true` if the stage draws its own interarrival times.
    #[inline]
    pub fn has_external_arrivals(&self) -> bool {
        !self.arrivals.is_none()
    }

    pub fn validate(&self) -> QsResult<()> {
        if self.servers == 0 {
            return Err(QsError::InvalidConfiguration(
                "a stage needs at least one server".into(),
            ));
        }
        if self.capacity < self.servers {
            return Err(QsError::InvalidConfiguration(format!(
                "capacity {} is smaller than server count {}",
                self.capacity, self.servers
            )));
        }
        self.arrivals.validate("arrival")?;
        self.service.validate("service")?;
        Ok(())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Per-run limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Maximum number of random draws before the engine stops taking events.
    pub draw_budget: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { draw_budget: 100_000 }
    }
}
