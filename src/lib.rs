//! Production roadmap scheduler.
//!
//! Computes a full calendar schedule for a backlog of multi-phase
//! productions (pre-production, shooting, staggered per-episode editing,
//! weekly publishing) over a pool of one or two producers, then packs
//! the resulting time blocks into the minimum number of non-overlapping
//! display tracks for timeline rendering.
//!
//! The scheduler is a pure function of its inputs: no I/O, no clock
//! reads (the caller injects "today"), no state across invocations.
//! Re-running with identical input produces identical output.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Production`, `Episode`,
//!   `ScheduledProduction`, `Roadmap`
//! - **`calendar`**: Civil-date primitives (Monday weeks, Saturdays)
//!   and the calendar week axis
//! - **`scheduler`**: The pipeline — `ProducerPool` allocation,
//!   `PhasePlan` derivation, `TrackPacker` interval partitioning,
//!   driven by `RoadmapScheduler`
//! - **`validation`**: Backlog integrity checks (duplicate IDs,
//!   inverted target windows)
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//!   (Interval Partitioning)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod calendar;
pub mod models;
pub mod scheduler;
pub mod validation;
