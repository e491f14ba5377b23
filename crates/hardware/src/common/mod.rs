//! Common types shared by every part of the simulator.
//!
//! 1. **Tags:** Program-order identifiers used for renaming and commit.
//! 2. **Registers:** Validated architectural register ids.
//! 3. **Unit classes:** The three functional-unit kinds and their latencies.
//! 4. **Errors:** Setup-time configuration and I/O errors.

/// Simulator-wide constants.
pub mod constants;

/// Setup error types.
pub mod error;

/// Architectural register ids.
pub mod reg;

/// Program-order tags.
pub mod tag;

/// Functional-unit classes.
pub mod unit;

pub use constants::{NUM_REGISTERS, NUM_UNIT_CLASSES};
pub use error::{ConfigError, SimError};
pub use reg::RegId;
pub use tag::Tag;
pub use unit::UnitClass;
