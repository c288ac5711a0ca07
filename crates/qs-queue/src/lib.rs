//! `qs-queue` — events, the event scheduler, and queue stage state.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`event`]      | `Event`, `EventKind`                                    |
//! | [`scheduler`]  | `EventScheduler` (`BinaryHeap` min-queue on time)       |
//! | [`stage`]      | `QueueStage`, `Admission`, `Release`                    |
//!
//! Stages never schedule events themselves.  Their transition primitives
//! report what happened (`Admission`, `Release`) and the engine in `qs-sim`
//! decides which follow-up events to draw and schedule.

pub mod event;
pub mod scheduler;
pub mod stage;


pub use event::{Event, EventKind};
pub use scheduler::EventScheduler;
pub use stage::{Admission, QueueStage, Release};
