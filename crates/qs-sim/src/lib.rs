//! `qs-sim` — discrete-event engine for the queuesim framework.
//!
//! # Event loop
//!
//! ```text
//! schedule first Arrival at the entry stage
//! while scheduler non-empty and draw budget remaining:
//!   ① Pop        — earliest event e (ties in insertion order)
//!   ② Accumulate — every stage charges (e.time - last_event) to its
//!                  current occupancy level
//!   ③ Advance    — clock.current = clock.last_event = e.time
//!   ④ Transition — Arrival   : admit/lose, draw service if a server was
//!                              free, always draw next arrival
//!                  Departure : release, draw service for the next waiter
//!                  Passage   : release at entry, offer to downstream
//! ```
//!
//! The engine serves one stage (`Topology::Single`) or an entry stage feeding
//! a downstream stage (`Topology::Tandem`).  Both share the same loop, clock,
//! and budget accounting.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::{LcgConfig, StageConfig};
//! use qs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::lcg(LcgConfig::MINSTD, StageConfig::new(1, 5, (2.0, 5.0), (3.0, 5.0)))?
//!     .draw_budget(100_000)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{SimReport, StageReport, StateProbability};
pub use sim::{Sim, Topology};
