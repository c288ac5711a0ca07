//! scenarios — reference runs for the queuesim framework.
//!
//! Runs three scenarios with the same LCG parameters and seed, each with a
//! fresh generator so every run is reproducible on its own:
//!
//! - G/G/1/5, arrivals U(2,5), service U(3,5)
//! - G/G/2/5, arrivals U(2,5), service U(3,5)
//! - tandem G/G/2/3 → G/G/2/3, arrivals U(1,4), service U(3,4) at both stages
//!
//! Pass a directory as the first argument to also write each run's CSV output
//! there (one sub-directory per scenario).  Set `RUST_LOG=debug` to see losses.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use qs_core::{Interval, LcgConfig, StageConfig};
use qs_output::{CsvWriter, SimOutputObserver};
use qs_sim::{NoopObserver, SimBuilder, SimReport, StageReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const DRAW_BUDGET: u64 = 100_000;
const LCG:         LcgConfig = LcgConfig::MINSTD;

struct Scenario {
    name:       &'static str,
    slug:       &'static str,
    entry:      StageConfig,
    downstream: Option<StageConfig>,
}

fn scenarios() -> [Scenario; 3] {
    [
        Scenario {
            name:       "G/G/1/5 (arrivals 2-5, service 3-5)",
            slug:       "gg15",
            entry:      StageConfig::new(1, 5, (2.0, 5.0), (3.0, 5.0)),
            downstream: None,
        },
        Scenario {
            name:       "G/G/2/5 (arrivals 2-5, service 3-5)",
            slug:       "gg25",
            entry:      StageConfig::new(2, 5, (2.0, 5.0), (3.0, 5.0)),
            downstream: None,
        },
        Scenario {
            name:       "Tandem G/G/2/3 -> G/G/2/3 (arrivals 1-4, service 3-4)",
            slug:       "tandem",
            entry:      StageConfig::new(2, 3, (1.0, 4.0), (3.0, 4.0)),
            downstream: Some(StageConfig::new(2, 3, Interval::NONE, (3.0, 4.0))),
        },
    ]
}

// ── Runner ────────────────────────────────────────────────────────────────────

fn run(scenario: &Scenario, out_dir: Option<&Path>) -> Result<SimReport> {
    let mut builder = SimBuilder::lcg(LCG, scenario.entry)?.draw_budget(DRAW_BUDGET);
    if let Some(downstream) = scenario.downstream {
        builder = builder.downstream(downstream);
    }
    let mut sim = builder.build()?;

    let Some(root) = out_dir else {
        return Ok(sim.run(&mut NoopObserver)?);
    };

    let dir = root.join(scenario.slug);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating {}", dir.display()))?;
    let mut obs = SimOutputObserver::new(CsvWriter::with_delimiter(&dir, b';')?);
    let report = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(report)
}

fn print_stage(stage: &StageReport) {
    println!("State;Time;Probability");
    for s in &stage.states {
        println!("{};{:.4};{:.4}", s.state, s.time, s.probability);
    }
    println!("Losses: {}", stage.loss_count);
    println!("Completed customers: {}", stage.completed_count);
    println!("Mean response time: {:.4}", stage.mean_response_time);
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    for (i, scenario) in scenarios().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===", scenario.name);
        let report = run(scenario, out_dir.as_deref())?;
        for stage in &report.stages {
            if report.stages.len() > 1 {
                println!("--- stage {} ---", stage.stage.0 + 1);
            }
            print_stage(stage);
        }
        println!("Simulated time: {:.4}", report.total_time);
    }

    Ok(())
}
