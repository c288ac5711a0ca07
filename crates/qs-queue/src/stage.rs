//! Per-stage queue state and its transition primitives.
//!
//! A `QueueStage` is one service station: `servers` identical servers in
//! front of a shared FIFO line, with room for at most `capacity` customers in
//! total.  Service is first-come first-served across the whole stage, so the
//! oldest admission timestamp always belongs to the next customer to leave,
//! whichever server finishes first.
//!
//! Invariants, maintained by every primitive:
//!
//! - `0 <= customers <= capacity`
//! - `0 <= busy_servers <= min(servers, customers)`
//! - `pending.len() == customers`
//! - histogram entries and all counters only grow

use std::collections::VecDeque;

use qs_core::{Interval, SimTime, StageConfig, StageId};

/// Outcome of [`QueueStage::try_admit`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Admission {
    /// The stage was full.  `loss_count` has been incremented.
    Rejected,
    /// The customer is resident.  When `server_free` is `true` a server has
    /// been taken and the caller must schedule its service completion.
    Admitted { server_free: bool },
}

/// Outcome of [`QueueStage::release`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Release {
    /// A waiting customer starts service on the freed server immediately; the
    /// caller must schedule its completion.
    StartNext,
    /// Nobody was waiting and the server went idle.
    ServerIdle,
}

/// Mutable state of one service station.
#[derive(Clone, Debug)]
pub struct QueueStage {
    id:     StageId,
    config: StageConfig,

    customers:    u32,
    busy_servers: u32,

    loss_count:     u64,
    admitted_count: u64,

    /// Simulated time spent at each occupancy level, indexed `0..=capacity`.
    state_time: Vec<f64>,

    /// Admission times of resident customers, oldest first.
    pending: VecDeque<SimTime>,

    completed_count:   u64,
    response_time_sum: f64,
}

impl QueueStage {
    pub fn new(id: StageId, config: StageConfig) -> Self {
        Self {
            id,
            config,
            customers:         0,
            busy_servers:      0,
            loss_count:        0,
            admitted_count:    0,
            state_time:        vec![0.0; config.capacity as usize + 1],
            pending:           VecDeque::with_capacity(config.capacity as usize),
            completed_count:   0,
            response_time_sum: 0.0,
        }
    }

    // ── Transition primitives ─────────────────────────────────────────────

    /// Offer one customer to the stage at time `now`.
    pub fn try_admit(&mut self, now: SimTime) -> Admission {
        if self.customers >= self.config.capacity {
            self.loss_count += 1;
            return Admission::Rejected;
        }

        self.customers += 1;
        self.admitted_count += 1;
        self.pending.push_back(now);

        let server_free = self.busy_servers < self.config.servers;
        if server_free {
            self.busy_servers += 1;
        }
        Admission::Admitted { server_free }
    }

    /// Complete one service at time `now`.
    ///
    /// Must only be called while at least one server is busy.
    pub fn release(&mut self, now: SimTime) -> Release {
        debug_assert!(self.busy_servers > 0, "{}: release with no busy server", self.id);

        self.customers -= 1;
        if let Some(admitted_at) = self.pending.pop_front() {
            self.response_time_sum += now - admitted_at;
        }
        self.completed_count += 1;

        if self.customers >= self.busy_servers {
            Release::StartNext
        } else {
            self.busy_servers -= 1;
            Release::ServerIdle
        }
    }

    /// Charge `elapsed` simulated time to the current occupancy level.
    #[inline]
    pub fn accumulate(&mut self, elapsed: f64) {
        let level = self.customers.min(self.config.capacity) as usize;
        self.state_time[level] += elapsed;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> StageId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    #[inline]
    pub fn arrivals(&self) -> Interval {
        self.config.arrivals
    }

    #[inline]
    pub fn service(&self) -> Interval {
        self.config.service
    }

    #[inline]
    pub fn customers(&self) -> u32 {
        self.customers
    }

    #[inline]
    pub fn busy_servers(&self) -> u32 {
        self.busy_servers
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.customers >= self.config.capacity
    }

    pub fn loss_count(&self) -> u64 {
        self.loss_count
    }

    pub fn admitted_count(&self) -> u64 {
        self.admitted_count
    }

    pub fn completed_count(&self) -> u64 {
        self.completed_count
    }

    pub fn response_time_sum(&self) -> f64 {
        self.response_time_sum
    }

    /// Per-occupancy accumulated time, length `capacity + 1`.
    pub fn state_time(&self) -> &[f64] {
        &self.state_time
    }

    /// Sum of the histogram.  Equals the engine clock's elapsed time.
    pub fn histogram_total(&self) -> f64 {
        self.state_time.iter().sum()
    }

    /// `responseTimeSum / completedCount`, or 0 before the first completion.
    pub fn mean_response_time(&self) -> f64 {
        if self.completed_count == 0 {
            0.0
        } else {
            self.response_time_sum / self.completed_count as f64
        }
    }
}
