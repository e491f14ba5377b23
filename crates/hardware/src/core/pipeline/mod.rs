//! Instruction pipeline implementation.
//!
//! This module contains the structures instructions move through and the
//! stages that move them:
//! 1. **Dispatch queue:** bounded FIFO filled by fetch.
//! 2. **Reservation stations:** per-class pools where renamed instructions
//!    wait for operands and a free lane.
//! 3. **Commit queue:** tag-ordered buffer that retires in program order.
//! 4. **Stages:** Commit, State-Update, Execute, Schedule, Dispatch, Fetch.

/// Tag-ordered in-order retirement buffer.
pub mod commit_queue;

/// Bounded FIFO between fetch and dispatch.
pub mod dispatch_queue;

/// Reservation stations and per-class pools.
pub mod reservation;

/// Pipeline stage implementations.
pub mod stages;

pub use commit_queue::CommitQueue;
pub use dispatch_queue::DispatchQueue;
pub use reservation::{Operand, ReservationPool, ReservationStation};
