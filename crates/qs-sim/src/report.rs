//! Structured run results.
//!
//! Built once from the engine's final state by [`Sim::report`][crate::Sim::report].
//! Reporters format these however they like; nothing here prints.

use qs_core::StageId;
use qs_queue::QueueStage;

/// One row of a stage's state distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateProbability {
    /// Occupancy level (customers resident).
    pub state:       u32,
    /// Simulated time spent at this level.
    pub time:        f64,
    /// `time / total_time`, or 0 when no time has elapsed.
    pub probability: f64,
}

/// Final metrics of one stage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageReport {
    pub stage:              StageId,
    pub states:             Vec<StateProbability>,
    pub loss_count:         u64,
    pub admitted_count:     u64,
    pub completed_count:    u64,
    pub response_time_sum:  f64,
    /// 0 when nothing completed.
    pub mean_response_time: f64,
}

impl StageReport {
    /// Normalise `stage`'s histogram against the network clock's `total_time`.
    pub fn from_stage(stage: &QueueStage, total_time: f64) -> Self {
        let states = stage
            .state_time()
            .iter()
            .enumerate()
            .map(|(level, &time)| StateProbability {
                state:       level as u32,
                time,
                probability: if total_time > 0.0 { time / total_time } else { 0.0 },
            })
            .collect();

        Self {
            stage:              stage.id(),
            states,
            loss_count:         stage.loss_count(),
            admitted_count:     stage.admitted_count(),
            completed_count:    stage.completed_count(),
            response_time_sum:  stage.response_time_sum(),
            mean_response_time: stage.mean_response_time(),
        }
    }

    /// Sum of all state probabilities.  1 for any run that advanced the clock.
    pub fn probability_total(&self) -> f64 {
        self.states.iter().map(|s| s.probability).sum()
    }
}

/// Final metrics of a whole run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    /// Network clock value at the last processed event.
    pub total_time:       f64,
    pub events_processed: u64,
    pub draws_used:       u64,
    /// One entry per stage, entry stage first.
    pub stages:           Vec<StageReport>,
}

impl SimReport {
    pub fn stage(&self, id: StageId) -> Option<&StageReport> {
        self.stages.get(id.index())
    }

    /// The stage customers leave the network from.
    pub fn terminal(&self) -> Option<&StageReport> {
        self.stages.last()
    }
}
