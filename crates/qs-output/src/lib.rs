//! `qs-output` — simulation output writers for the queuesim framework.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                                  |
//! |-----------|-------------|----------------------------------------------------------------|
//! | *(none)*  | CSV         | `events.csv`, `state_probabilities.csv`, `stage_summaries.csv` |
//! | `sqlite`  | SQLite      | `output.db`                                                    |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `qs_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::with_delimiter(Path::new("./output"), b';').unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventTraceRow, StageSummaryRow, StateRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
