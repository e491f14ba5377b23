//! Trace instructions and fetched instruction records.

use std::fmt;

use crate::common::{RegId, Tag, UnitClass};

/// One decoded trace line, before it has been given a program-order tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceInst {
    /// Instruction address from the trace (diagnostic only).
    pub address: u32,
    /// Functional-unit class that executes this instruction.
    pub unit: UnitClass,
    /// Destination register, if the instruction writes one.
    pub dest: Option<RegId>,
    /// Source registers.
    pub src: [Option<RegId>; 2],
}

impl TraceInst {
    /// Creates a trace instruction with no registers at address 0.
    pub const fn new(unit: UnitClass) -> Self {
        Self {
            address: 0,
            unit,
            dest: None,
            src: [None, None],
        }
    }
}

/// An instruction after fetch: a trace instruction plus its tag.
///
/// Immutable once created. It travels by value from the dispatch queue into
/// a reservation station and is dropped when the station retires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstRecord {
    /// Program-order tag (1-based trace position).
    pub tag: Tag,
    /// Instruction address from the trace.
    pub address: u32,
    /// Functional-unit class.
    pub unit: UnitClass,
    /// Destination register.
    pub dest: Option<RegId>,
    /// Source registers.
    pub src: [Option<RegId>; 2],
}

impl InstRecord {
    /// Attaches a tag to a trace instruction.
    pub const fn new(tag: Tag, inst: TraceInst) -> Self {
        Self {
            tag,
            address: inst.address,
            unit: inst.unit,
            dest: inst.dest,
            src: inst.src,
        }
    }
}

impl fmt::Display for InstRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reg = |r: Option<RegId>| r.map_or_else(|| "-".to_owned(), |r| r.to_string());
        write!(
            f,
            "#{} {:08x} {} {} <- {}, {}",
            self.tag,
            self.address,
            self.unit,
            reg(self.dest),
            reg(self.src[0]),
            reg(self.src[1]),
        )
    }
}
