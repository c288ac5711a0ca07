//! Plain data row types written by output backends.

use qs_core::SimClock;
use qs_queue::{Event, QueueStage};
use qs_sim::{SimReport, StageReport};

/// Network state right after one processed event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTraceRow {
    /// 0-based position of the event in the run.
    pub seq:                  u64,
    pub time:                 f64,
    pub kind:                 &'static str,
    pub stage:                u32,
    pub entry_customers:      u32,
    /// `None` for single-stage runs.
    pub downstream_customers: Option<u32>,
}

impl EventTraceRow {
    pub fn new(seq: u64, event: &Event, clock: &SimClock, stages: &[QueueStage]) -> Self {
        Self {
            seq,
            time:                 clock.current.0,
            kind:                 event.kind.as_str(),
            stage:                event.stage.0,
            entry_customers:      stages.first().map_or(0, QueueStage::customers),
            downstream_customers: stages.get(1).map(QueueStage::customers),
        }
    }
}

/// Accumulated time and probability of one occupancy level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRow {
    pub stage:       u32,
    pub state:       u32,
    pub time:        f64,
    pub probability: f64,
}

impl StateRow {
    /// One row per occupancy level of `stage`.
    pub fn from_stage(stage: &StageReport) -> impl Iterator<Item = StateRow> + '_ {
        stage.states.iter().map(move |s| StateRow {
            stage:       stage.stage.0,
            state:       s.state,
            time:        s.time,
            probability: s.probability,
        })
    }

    /// All stages of `report`, entry stage first.
    pub fn from_report(report: &SimReport) -> Vec<StateRow> {
        report.stages.iter().flat_map(StateRow::from_stage).collect()
    }
}

/// Counters and mean response time of one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSummaryRow {
    pub stage:              u32,
    pub loss:               u64,
    pub admitted:           u64,
    pub completed:          u64,
    pub mean_response_time: f64,
}

impl From<&StageReport> for StageSummaryRow {
    fn from(s: &StageReport) -> Self {
        Self {
            stage:              s.stage.0,
            loss:               s.loss_count,
            admitted:           s.admitted_count,
            completed:          s.completed_count,
            mean_response_time: s.mean_response_time,
        }
    }
}

impl StageSummaryRow {
    pub fn from_report(report: &SimReport) -> Vec<StageSummaryRow> {
        report.stages.iter().map(StageSummaryRow::from).collect()
    }
}
