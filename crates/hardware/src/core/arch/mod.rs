//! Architectural state.
//!
//! The only architectural structure this core models is the register
//! rename/scoreboard table; values are never computed.

/// Tag-based register file.
pub mod register_file;

pub use register_file::RegisterFile;
