//! Tomasulo out-of-order core simulator library.
//!
//! This crate implements a cycle-accurate model of a dynamically scheduled
//! superscalar core driven by an instruction trace:
//! 1. **Core:** tag-based register renaming, per-class reservation-station
//!    pools, pipelined functional-unit banks and an in-order commit queue.
//! 2. **Pipeline:** Commit, State-Update, Execute, Schedule, Dispatch and
//!    Fetch stages, run once per cycle in that order.
//! 3. **Trace:** line-oriented trace parsing and in-memory trace sources.
//! 4. **Simulation:** configuration, statistics and per-instruction timelines.
//!
//! ```
//! use procsim_core::{Config, Simulator};
//! use procsim_core::trace::MemoryTrace;
//!
//! let trace = MemoryTrace::default();
//! let mut sim = Simulator::new(&Config::default(), trace).unwrap();
//! sim.run();
//! assert_eq!(sim.stats().instructions_retired, 0);
//! ```

/// Common types and constants (tags, registers, unit classes, errors).
pub mod common;
/// Simulator configuration (defaults, pipeline sizing, validation).
pub mod config;
/// Out-of-order core (register file, units, pipeline, stages).
pub mod core;
/// Simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Per-instruction stage timeline.
pub mod timeline;
/// Trace parsing and trace sources.
pub mod trace;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Core state; holds every pipeline structure and the stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Run statistics.
pub use crate::stats::SimStats;
