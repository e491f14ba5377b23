//! Global simulator constants.

/// Number of architectural registers addressable by a trace.
pub const NUM_REGISTERS: usize = 128;

/// Number of functional-unit classes (K0, K1, K2).
pub const NUM_UNIT_CLASSES: usize = 3;
