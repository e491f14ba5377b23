//! Out-of-order core.
//!
//! This module contains the Tomasulo-style engine: the rename table, the
//! functional-unit banks, the reservation stations and commit queue, the
//! six pipeline stages, and the `Cpu` that bundles their state.

/// Architectural state (register rename table and scoreboard).
pub mod arch;

/// Core state container and cycle driver.
pub mod cpu;

/// Pipeline structures and stage implementations.
pub mod pipeline;

/// Pipelined functional-unit banks.
pub mod units;

pub use self::cpu::Cpu;
