//! Fluent builder for constructing a [`Sim`].

use qs_core::{
    DrawBudget, Lcg, LcgConfig, RunConfig, SimClock, StageConfig, StageId, UniformSource,
};
use qs_queue::{EventScheduler, QueueStage};

use crate::{Sim, SimError, SimResult, Topology};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - `R: UniformSource` — the random source (e.g. [`Lcg`])
/// - [`StageConfig`] of the entry stage
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                         |
/// |----------------------|---------------------------------|
/// | `.downstream(cfg)`   | none: single-stage topology     |
/// | `.draw_budget(n)`    | `RunConfig::default()` (100 000)|
/// | `.run_config(cfg)`   | `RunConfig::default()`          |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::lcg(LcgConfig::MINSTD, StageConfig::new(2, 3, (1.0, 4.0), (3.0, 4.0)))?
///     .downstream(StageConfig::new(2, 3, Interval::NONE, (3.0, 4.0)))
///     .draw_budget(100_000)
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: UniformSource> {
    rng:        R,
    entry:      StageConfig,
    downstream: Option<StageConfig>,
    run:        RunConfig,
}

impl SimBuilder<Lcg> {
    /// Builder driven by a fresh LCG.  Fails if `config.modulus` is zero.
    pub fn lcg(config: LcgConfig, entry: StageConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::new(Lcg::new(config), entry))
    }
}

impl<R: UniformSource> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(rng: R, entry: StageConfig) -> Self {
        Self {
            rng,
            entry,
            downstream: None,
            run:        RunConfig::default(),
        }
    }

    /// Add a downstream stage fed by the entry stage's completions.
    ///
    /// Its arrival interval must be [`Interval::NONE`][qs_core::Interval::NONE].
    pub fn downstream(mut self, config: StageConfig) -> Self {
        self.downstream = Some(config);
        self
    }

    pub fn draw_budget(mut self, draws: u64) -> Self {
        self.run.draw_budget = draws;
        self
    }

    pub fn run_config(mut self, run: RunConfig) -> Self {
        self.run = run;
        self
    }

    /// Validate every stage and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        self.entry.validate()?;

        let mut stages = vec![QueueStage::new(StageId::ENTRY, self.entry)];
        let topology = match self.downstream {
            None => Topology::Single,
            Some(cfg) => {
                cfg.validate()?;
                if cfg.has_external_arrivals() {
                    return Err(SimError::Config(format!(
                        "downstream stage is fed by the entry stage and cannot have \
                         external arrivals, got ({}, {})",
                        cfg.arrivals.min, cfg.arrivals.max
                    )));
                }
                stages.push(QueueStage::new(StageId::DOWNSTREAM, cfg));
                Topology::Tandem
            }
        };

        Ok(Sim {
            rng:              self.rng,
            budget:           DrawBudget::new(self.run.draw_budget),
            clock:            SimClock::new(),
            scheduler:        EventScheduler::new(),
            stages,
            topology,
            events_processed: 0,
            seeded:           false,
        })
    }
}
