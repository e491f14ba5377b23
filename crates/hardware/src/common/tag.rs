//! Program-order instruction tags.

use serde::Serialize;
use std::fmt;

/// Unique tag identifying an instruction in program order.
///
/// Tags start at 1 and increase by one per fetched instruction. The same
/// value is the rename tag held in the register file, the identity carried
/// through a functional-unit lane, and the key of the commit queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(pub u64);

impl Tag {
    /// Tag of the first instruction of every trace.
    pub const FIRST: Self = Self(1);

    /// Returns the tag that follows this one in program order.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
