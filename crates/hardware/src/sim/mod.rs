//! Simulation driver.
//!
//! Pairs a [`Cpu`](crate::core::Cpu) with the trace source it fetches from
//! and runs it until the trace has fully retired.

/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
