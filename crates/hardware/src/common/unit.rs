//! Functional-unit classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three functional-unit classes of the core.
///
/// Each class has its own reservation-station pool and its own bank of
/// pipelined lanes. The class also fixes the execution latency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Single-stage units.
    K0,
    /// Two-stage units.
    K1,
    /// Three-stage units.
    K2,
}

impl UnitClass {
    /// All classes in index order.
    pub const ALL: [Self; 3] = [Self::K0, Self::K1, Self::K2];

    /// Pipeline depth of every lane of this class, in cycles.
    #[inline]
    pub const fn latency(self) -> usize {
        match self {
            Self::K0 => 1,
            Self::K1 => 2,
            Self::K2 => 3,
        }
    }

    /// Dense index used for per-class arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::K0 => 0,
            Self::K1 => 1,
            Self::K2 => 2,
        }
    }

    /// Maps a trace opcode onto a unit class.
    ///
    /// Opcode `-1` marks an untyped operation and runs on K1, like the
    /// trace format this simulator reads. Any other value outside `0..=2`
    /// is not an instruction.
    pub const fn from_opcode(op: i32) -> Option<Self> {
        match op {
            0 => Some(Self::K0),
            1 | -1 => Some(Self::K1),
            2 => Some(Self::K2),
            _ => None,
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::K0 => "k0",
            Self::K1 => "k1",
            Self::K2 => "k2",
        };
        f.write_str(name)
    }
}
