//! Pipelined functional-unit bank.
//!
//! A bank holds every lane of one unit class. Each lane is a shift register
//! of `depth` slots: slot 0 is the issue point, slot `depth - 1` the
//! completion point. All lanes live in one flat arena indexed
//! `lane * depth + stage`, so advancing a cycle moves tags in place.

use crate::common::{Tag, UnitClass};

/// All lanes of one functional-unit class.
#[derive(Clone, Debug)]
pub struct FunctionalUnitBank {
    class: UnitClass,
    lanes: usize,
    depth: usize,
    slots: Vec<Option<Tag>>,
}

impl FunctionalUnitBank {
    /// Creates a bank of `lanes` idle lanes for `class`.
    pub fn new(class: UnitClass, lanes: usize) -> Self {
        let depth = class.latency();
        Self {
            class,
            lanes,
            depth,
            slots: vec![None; lanes * depth],
        }
    }

    /// True iff at least one lane's issue slot is empty.
    pub fn has_free_lane(&self) -> bool {
        self.slots.iter().step_by(self.depth).any(Option::is_none)
    }

    /// Places `tag` into the issue slot of the first free lane.
    ///
    /// # Panics
    ///
    /// Panics if no lane is free. Callers check [`Self::has_free_lane`]
    /// first; issuing into a full bank would silently lose an instruction.
    pub fn issue(&mut self, tag: Tag) {
        let depth = self.depth;
        let slot = self
            .slots
            .iter_mut()
            .step_by(depth)
            .find(|s| s.is_none());
        match slot {
            Some(slot) => *slot = Some(tag),
            None => panic!("{} bank: issued tag {tag} with no free lane", self.class),
        }
    }

    /// Shifts every lane forward by one stage.
    ///
    /// Returns the tags leaving the completion slot, in lane order. Every
    /// issue slot is empty afterwards. Called exactly once per cycle, before
    /// the schedule stage issues new work.
    pub fn advance(&mut self) -> Vec<Tag> {
        let mut finished = Vec::new();
        for lane in self.slots.chunks_exact_mut(self.depth) {
            if let Some(tag) = lane[lane.len() - 1] {
                finished.push(tag);
            }
            lane.rotate_right(1);
            lane[0] = None;
        }
        finished
    }

    /// Tags currently in flight, lane by lane from issue to completion slot.
    pub fn in_flight(&self) -> impl Iterator<Item = Tag> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Number of occupied slots across all lanes.
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when no lane holds a tag.
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Contents of one lane, issue slot first.
    ///
    /// # Panics
    ///
    /// Panics if `lane` is out of range.
    pub fn lane(&self, lane: usize) -> &[Option<Tag>] {
        assert!(lane < self.lanes, "{} bank has no lane {lane}", self.class);
        &self.slots[lane * self.depth..(lane + 1) * self.depth]
    }
}
