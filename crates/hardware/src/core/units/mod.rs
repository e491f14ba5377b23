//! Execution units.
//!
//! Functional units do no arithmetic here; they only model occupancy and
//! latency as fixed-depth pipelines of instruction tags.

/// Pipelined functional-unit banks.
pub mod fu_bank;

pub use fu_bank::FunctionalUnitBank;
