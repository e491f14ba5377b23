//! Error types for simulator setup and reporting.
//!
//! Setup can fail on a bad configuration or an unreadable trace or config
//! file, and reporting can fail on a broken output stream. Once the first
//! cycle runs, the engine has no recoverable errors; a malformed trace line
//! simply ends the trace, and a broken internal invariant is a panic.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::unit::UnitClass;

/// A configuration value that would make the core unable to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The fetch stage must admit at least one instruction per cycle.
    #[error("fetch width must be at least 1")]
    ZeroFetchWidth,

    /// Every unit class needs at least one lane.
    #[error("{class} unit count must be at least 1")]
    ZeroUnits {
        /// The class with no units.
        class: UnitClass,
    },

    /// Queue multipliers size the reservation stations and dispatch queue.
    #[error("{name} multiplier must be at least 1")]
    ZeroMultiplier {
        /// Which multiplier (`dispatch` or `schedule`).
        name: &'static str,
    },
}

/// Top-level error returned by fallible simulator setup and reporting.
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Configuration JSON did not parse.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Trace file could not be opened.
    #[error("failed to open trace {path}: {source}")]
    TraceOpen {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Writing the report failed (for example, a closed pipe).
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
