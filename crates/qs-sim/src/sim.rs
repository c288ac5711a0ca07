//! The `Sim` struct and its event loop.

use qs_core::{DrawBudget, Interval, SimClock, StageId, UniformSource};
use qs_queue::{Admission, Event, EventKind, EventScheduler, QueueStage, Release};
use tracing::{debug, info, trace};

use crate::{SimObserver, SimReport, SimResult, StageReport};

// ── Topology ──────────────────────────────────────────────────────────────────

/// How the engine's stages are connected.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// One stage with external arrivals; completions leave the network.
    Single,
    /// Entry stage with external arrivals whose completions are offered to a
    /// downstream stage at the same instant.
    Tandem,
}

impl Topology {
    /// Event kind that ends a service at `stage`.
    #[inline]
    pub fn completion_kind(self, stage: StageId) -> EventKind {
        match self {
            Topology::Tandem if stage == StageId::ENTRY => EventKind::Passage,
            _ => EventKind::Departure,
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Sim<R>` owns the random source, the draw budget, the network clock, the
/// scheduler, and every stage.  Each iteration of the loop:
///
/// 1. **Pop** the earliest event.
/// 2. **Accumulate** the time elapsed since the previous event into every
///    stage's histogram, at that stage's current occupancy.
/// 3. **Advance** the clock to the event time.
/// 4. **Transition** the affected stage(s) and draw/schedule follow-ups:
///    - `Arrival`   → admit or lose; a taken server draws a service time;
///                    the next arrival is always drawn.
///    - `Departure` → release; a waiting customer draws a service time.
///    - `Passage`   → release at the entry stage, then offer the customer to
///                    the downstream stage.
///
/// The loop stops when the scheduler is empty or the budget is exhausted.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: UniformSource> {
    pub(crate) rng:       R,
    pub(crate) budget:    DrawBudget,
    pub(crate) clock:     SimClock,
    pub(crate) scheduler: EventScheduler,
    pub(crate) stages:    Vec<QueueStage>,
    pub(crate) topology:  Topology,

    pub(crate) events_processed: u64,
    pub(crate) seeded:           bool,
}

impl<R: UniformSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the scheduler drains or the draw budget is exhausted.
    ///
    /// Events still pending when the budget runs out are discarded.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            topology = ?self.topology,
            stages = self.stages.len(),
            draw_budget = self.budget.limit(),
            "simulation starting"
        );
        observer.on_run_start(&self.stages);

        while self.step(observer)? {}

        if !self.scheduler.is_empty() {
            debug!(pending = self.scheduler.len(), "draw budget exhausted, discarding pending events");
            self.scheduler.clear();
        }

        let report = self.report();
        info!(
            events = report.events_processed,
            draws = report.draws_used,
            total_time = report.total_time,
            "simulation finished"
        );
        observer.on_run_end(&report);
        Ok(report)
    }

    /// Process exactly one event.
    ///
    /// Schedules the initial arrival on first use.  Returns `Ok(false)`
    /// without touching any state when the scheduler is empty or the budget
    /// is exhausted.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        self.seed();

        if self.scheduler.is_empty() || self.budget.is_exhausted() {
            return Ok(false);
        }

        let event = self.scheduler.pop_min()?;
        let elapsed = self.clock.advance_to(event.time);
        for stage in &mut self.stages {
            stage.accumulate(elapsed);
        }
        trace!(%event, elapsed, "event");

        match event.kind {
            EventKind::Arrival   => self.on_arrival(event.stage),
            EventKind::Departure => self.on_departure(event.stage),
            EventKind::Passage   => self.on_passage(event.stage),
        }

        self.events_processed += 1;
        observer.on_event(&event, &self.clock, &self.stages);
        Ok(true)
    }

    /// Snapshot the current metrics.
    pub fn report(&self) -> SimReport {
        let total_time = self.clock.elapsed();
        SimReport {
            total_time,
            events_processed: self.events_processed,
            draws_used:       self.budget.used(),
            stages:           self
                .stages
                .iter()
                .map(|s| StageReport::from_stage(s, total_time))
                .collect(),
        }
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn budget(&self) -> &DrawBudget {
        &self.budget
    }

    pub fn stages(&self) -> &[QueueStage] {
        &self.stages
    }

    pub fn stage(&self, id: StageId) -> Option<&QueueStage> {
        self.stages.get(id.index())
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn on_arrival(&mut self, id: StageId) {
        let now = self.clock.current;
        match self.stages[id.index()].try_admit(now) {
            Admission::Admitted { server_free: true } => self.schedule_completion(id),
            Admission::Admitted { server_free: false } => {}
            Admission::Rejected => debug!(stage = %id, %now, "arrival lost"),
        }
        // Renewal is independent of acceptance.
        self.schedule_arrival(id);
    }

    fn on_departure(&mut self, id: StageId) {
        let now = self.clock.current;
        if self.stages[id.index()].release(now) == Release::StartNext {
            self.schedule_completion(id);
        }
    }

    fn on_passage(&mut self, id: StageId) {
        self.on_departure(id);

        let now = self.clock.current;
        let downstream = StageId::DOWNSTREAM;
        match self.stages[downstream.index()].try_admit(now) {
            Admission::Admitted { server_free: true } => self.schedule_completion(downstream),
            Admission::Admitted { server_free: false } => {}
            Admission::Rejected => debug!(stage = %downstream, %now, "passage lost"),
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Schedule the first arrival at every stage with an external arrival
    /// process.  Runs once.
    fn seed(&mut self) {
        if self.seeded {
            return;
        }
        self.seeded = true;
        for i in 0..self.stages.len() {
            if self.stages[i].config().has_external_arrivals() {
                self.schedule_arrival(self.stages[i].id());
            }
        }
    }

    fn schedule_arrival(&mut self, id: StageId) {
        let interval = self.stages[id.index()].arrivals();
        if interval.is_none() {
            return;
        }
        let dt = self.draw(interval);
        self.scheduler.insert(Event::arrival(self.clock.current + dt, id));
    }

    fn schedule_completion(&mut self, id: StageId) {
        let dt = self.draw(self.stages[id.index()].service());
        let kind = self.topology.completion_kind(id);
        self.scheduler.insert(Event::new(self.clock.current + dt, kind, id));
    }

    /// Sample `interval`, charging one unit of the draw budget.
    #[inline]
    fn draw(&mut self, interval: Interval) -> f64 {
        self.budget.consume();
        interval.sample(self.rng.next_uniform())
    }
}
