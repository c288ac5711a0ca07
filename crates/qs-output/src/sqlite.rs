//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `events`, `state_probabilities`, and `stage_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{EventTraceRow, OutputResult, StageSummaryRow, StateRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 seq                  INTEGER PRIMARY KEY,
                 time                 REAL    NOT NULL,
                 kind                 TEXT    NOT NULL,
                 stage                INTEGER NOT NULL,
                 entry_customers      INTEGER NOT NULL,
                 downstream_customers INTEGER
             );
             CREATE TABLE IF NOT EXISTS state_probabilities (
                 stage       INTEGER NOT NULL,
                 state       INTEGER NOT NULL,
                 time        REAL    NOT NULL,
                 probability REAL    NOT NULL,
                 PRIMARY KEY (stage, state)
             );
             CREATE TABLE IF NOT EXISTS stage_summaries (
                 stage              INTEGER PRIMARY KEY,
                 loss               INTEGER NOT NULL,
                 admitted           INTEGER NOT NULL,
                 completed          INTEGER NOT NULL,
                 mean_response_time REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventTraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events \
                 (seq, time, kind, stage, entry_customers, downstream_customers) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.seq as i64,
                    row.time,
                    row.kind,
                    row.stage,
                    row.entry_customers,
                    row.downstream_customers,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_states(&mut self, rows: &[StateRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO state_probabilities (stage, state, time, probability) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.stage, row.state, row.time, row.probability])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summaries(&mut self, rows: &[StageSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT INTO stage_summaries (stage, loss, admitted, completed, mean_response_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    row.stage,
                    row.loss as i64,
                    row.admitted as i64,
                    row.completed as i64,
                    row.mean_response_time,
                ],
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
