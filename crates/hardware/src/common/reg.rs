//! Architectural register identifiers.
//!
//! Traces name registers with plain integers; `-1` means "no register". This
//! module turns those integers into a validated [`RegId`] so that an
//! out-of-range register can never reach the rename table.

use std::fmt;

use super::constants::NUM_REGISTERS;

/// Index of an architectural register (`r0`..`r127`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegId(u8);

impl RegId {
    /// Creates a register id, returning `None` when `idx` is out of range.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < NUM_REGISTERS {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Decodes a register field from a trace line.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` for the `-1` "no register" sentinel.
    /// * `Ok(Some(reg))` for an in-range register.
    /// * `Err(raw)` for anything else.
    pub fn from_trace(raw: i32) -> Result<Option<Self>, i32> {
        if raw == -1 {
            return Ok(None);
        }
        usize::try_from(raw)
            .ok()
            .and_then(Self::new)
            .map(Some)
            .ok_or(raw)
    }

    /// Returns the register index as a `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
