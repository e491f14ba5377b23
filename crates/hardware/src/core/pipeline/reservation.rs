//! Reservation stations and per-class station pools.
//!
//! A station is created when dispatch admits an instruction and is moved,
//! never copied, through its owners: the pool while it waits and executes,
//! the completion list after it leaves its lane, then the commit queue.

use tracing::trace;

use crate::common::{Tag, UnitClass};
use crate::core::arch::RegisterFile;
use crate::core::units::FunctionalUnitBank;
use crate::trace::InstRecord;

/// One renamed source operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Value is available.
    pub ready: bool,
    /// Producer being waited on; `None` once ready at dispatch.
    pub tag: Option<Tag>,
}

impl Operand {
    /// An operand that needs no producer.
    pub const READY: Self = Self {
        ready: true,
        tag: None,
    };

    /// An operand waiting for `tag`.
    pub const fn waiting_on(tag: Tag) -> Self {
        Self {
            ready: false,
            tag: Some(tag),
        }
    }

    /// Marks the operand ready if it waits on `tag`. Returns whether it woke.
    pub fn wake(&mut self, tag: Tag) -> bool {
        if !self.ready && self.tag == Some(tag) {
            self.ready = true;
            true
        } else {
            false
        }
    }
}

/// A dispatched instruction waiting for operands and a functional unit.
#[derive(Debug, PartialEq, Eq)]
pub struct ReservationStation {
    /// The instruction being tracked.
    pub inst: InstRecord,
    /// Renamed source operands.
    pub operands: [Operand; 2],
    /// Set once, when the station enters a functional-unit lane.
    pub issued: bool,
}

impl ReservationStation {
    /// Renames `inst` against the register file and creates its station.
    ///
    /// Sources are read first, then the destination is claimed, so an
    /// instruction that reads its own destination waits on the previous
    /// producer rather than on itself.
    pub fn rename(inst: InstRecord, regs: &mut RegisterFile) -> Self {
        let operands = inst
            .src
            .map(|src| regs.pending_producer(src).map_or(Operand::READY, Operand::waiting_on));

        regs.set_tag(inst.dest, inst.tag);
        regs.set_ready(inst.dest, false);

        Self {
            inst,
            operands,
            issued: false,
        }
    }

    /// Program-order tag.
    #[inline]
    pub const fn tag(&self) -> Tag {
        self.inst.tag
    }

    /// Unit class this station issues to.
    #[inline]
    pub const fn unit(&self) -> UnitClass {
        self.inst.unit
    }

    /// Both source operands are available.
    #[inline]
    pub const fn operands_ready(&self) -> bool {
        self.operands[0].ready && self.operands[1].ready
    }

    /// Wakes every operand waiting on `tag`. Returns how many woke.
    pub fn wake(&mut self, tag: Tag) -> usize {
        self.operands.iter_mut().map(|op| usize::from(op.wake(tag))).sum()
    }
}

/// Bounded pool of reservation stations for one unit class.
///
/// Stations are kept in admission order, which is also tag order because
/// dispatch is strictly in order.
#[derive(Debug)]
pub struct ReservationPool {
    class: UnitClass,
    capacity: usize,
    stations: Vec<ReservationStation>,
}

impl ReservationPool {
    /// Creates an empty pool holding at most `capacity` stations.
    pub fn new(class: UnitClass, capacity: usize) -> Self {
        Self {
            class,
            capacity,
            stations: Vec::with_capacity(capacity),
        }
    }

    /// Unit class of this pool.
    #[inline]
    pub const fn class(&self) -> UnitClass {
        self.class
    }

    /// Maximum number of stations.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied stations, executing ones included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.stations.len()
    }

    /// True when no station is occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// True when another instruction can be admitted.
    #[inline]
    pub const fn has_free_slot(&self) -> bool {
        self.stations.len() < self.capacity
    }

    /// Admits `inst`, renaming its operands through `regs`.
    ///
    /// # Panics
    ///
    /// Panics if the pool is full or `inst` belongs to another class.
    pub fn admit(&mut self, inst: InstRecord, regs: &mut RegisterFile) {
        assert!(
            self.has_free_slot(),
            "{} pool: admitted tag {} into a full pool ({} stations)",
            self.class,
            inst.tag,
            self.capacity
        );
        assert_eq!(inst.unit, self.class, "tag {} admitted to the wrong pool", inst.tag);

        let station = ReservationStation::rename(inst, regs);
        trace!(
            "DP  tag={} class={} src0={:?} src1={:?}",
            station.tag(),
            self.class,
            station.operands[0],
            station.operands[1]
        );
        self.stations.push(station);
    }

    /// A station may issue: operands ready, not yet issued, and a free lane.
    pub fn ready_to_issue(station: &ReservationStation, bank: &FunctionalUnitBank) -> bool {
        !station.issued && station.operands_ready() && bank.has_free_lane()
    }

    /// Forwards a completed `tag` to every pooled station. Returns the number
    /// of operands woken.
    pub fn broadcast(&mut self, tag: Tag) -> usize {
        self.stations.iter_mut().map(|s| s.wake(tag)).sum()
    }

    /// Removes and returns the station with `tag`.
    pub fn take(&mut self, tag: Tag) -> Option<ReservationStation> {
        let idx = self.stations.iter().position(|s| s.tag() == tag)?;
        Some(self.stations.remove(idx))
    }

    /// Looks up a pooled station.
    pub fn get(&self, tag: Tag) -> Option<&ReservationStation> {
        self.stations.iter().find(|s| s.tag() == tag)
    }

    /// Pooled stations in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &ReservationStation> {
        self.stations.iter()
    }

    /// Mutable access to pooled stations in tag order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ReservationStation> {
        self.stations.iter_mut()
    }
}
