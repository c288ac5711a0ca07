//! `qs-core` — foundational types for the `queuesim` framework.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no `qs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StageId`                                             |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`rng`]         | `UniformSource`, `Lcg`, `LcgConfig`, `SimRng`, `DrawBudget` |
//! | [`config`]      | `Interval`, `StageConfig`, `RunConfig`                |
//! | [`error`]       | `QsError`, `QsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Interval, RunConfig, StageConfig};
pub use error::{QsError, QsResult};
pub use ids::StageId;
pub use rng::{DrawBudget, Lcg, LcgConfig, SimRng, UniformSource};
pub use time::{SimClock, SimTime};
