//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `events.csv`
//! - `state_probabilities.csv`
//! - `stage_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::{EventTraceRow, OutputResult, StageSummaryRow, StateRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    states:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::with_delimiter(dir, b',')
    }

    /// Like [`new`][Self::new] with a custom field delimiter.  `b';'` gives
    /// the classic `State;Time;Probability` layout.
    pub fn with_delimiter(dir: &Path, delimiter: u8) -> OutputResult<Self> {
        let open = |name: &str| -> OutputResult<Writer<File>> {
            Ok(WriterBuilder::new()
                .delimiter(delimiter)
                .from_path(dir.join(name))?)
        };

        let mut events = open("events.csv")?;
        events.write_record(["seq", "time", "kind", "stage", "entry_customers", "downstream_customers"])?;

        let mut states = open("state_probabilities.csv")?;
        states.write_record(["stage", "state", "time", "probability"])?;

        let mut summaries = open("stage_summaries.csv")?;
        summaries.write_record(["stage", "loss", "admitted", "completed", "mean_response_time"])?;

        Ok(Self {
            events,
            states,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventTraceRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                row.time.to_string(),
                row.kind.to_string(),
                row.stage.to_string(),
                row.entry_customers.to_string(),
                row.downstream_customers.map(|n| n.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_states(&mut self, rows: &[StateRow]) -> OutputResult<()> {
        for row in rows {
            self.states.write_record(&[
                row.stage.to_string(),
                row.state.to_string(),
                row.time.to_string(),
                row.probability.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[StageSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.stage.to_string(),
                row.loss.to_string(),
                row.admitted.to_string(),
                row.completed.to_string(),
                row.mean_response_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.states.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
