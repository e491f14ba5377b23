//! Core state container.
//!
//! The `Cpu` bundles every structure the pipeline stages mutate: the
//! register file, the dispatch queue, one reservation-station pool and one
//! functional-unit bank per unit class, the completion list, the commit
//! queue, and the cycle and tag counters. Stage functions take it by
//! `&mut` and nothing lives outside it.

/// Cycle driver (`Cpu::tick`).
mod execution;

use crate::common::{NUM_UNIT_CLASSES, Tag, UnitClass};
use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::{CommitQueue, DispatchQueue, ReservationPool, ReservationStation};
use crate::core::units::FunctionalUnitBank;
use crate::stats::SimStats;
use crate::timeline::{Stage, Timeline};

/// Complete simulated core state.
#[derive(Debug)]
pub struct Cpu {
    /// Rename table and scoreboard.
    pub regs: RegisterFile,
    /// Fetched instructions waiting for a reservation station.
    pub dispatch_queue: DispatchQueue,
    /// Reservation-station pools, indexed by [`UnitClass::index`].
    pub pools: [ReservationPool; NUM_UNIT_CLASSES],
    /// Functional-unit banks, indexed by [`UnitClass::index`].
    pub banks: [FunctionalUnitBank; NUM_UNIT_CLASSES],
    /// Stations that left their lane this cycle; consumed by the next
    /// state-update stage.
    pub completed: Vec<ReservationStation>,
    /// Completed stations waiting to retire in order.
    pub commit_queue: CommitQueue,
    /// Current cycle number, starting at 0.
    pub cycle: u64,
    /// Tag the fetch stage gives to the next instruction.
    pub next_tag: Tag,
    /// Tag the commit stage must retire next.
    pub expected_tag: Tag,
    /// The trace source has signalled end of input.
    pub trace_exhausted: bool,
    /// Maximum instructions fetched per cycle.
    pub fetch_width: usize,
    /// Retired tags in retirement order, recorded alongside the timeline.
    pub retired: Option<Vec<Tag>>,
    /// Performance statistics.
    pub stats: SimStats,
    /// Per-instruction stage cycles, when enabled.
    pub timeline: Option<Timeline>,
}

impl Cpu {
    /// Creates an idle core sized by `config`.
    ///
    /// The configuration is assumed valid; [`crate::sim::Simulator::new`]
    /// validates it before building a core.
    pub fn new(config: &Config) -> Self {
        let pipeline = &config.pipeline;
        Self {
            regs: RegisterFile::new(),
            dispatch_queue: DispatchQueue::new(pipeline.dispatch_queue_capacity()),
            pools: UnitClass::ALL.map(|c| ReservationPool::new(c, pipeline.rs_capacity(c))),
            banks: UnitClass::ALL.map(|c| FunctionalUnitBank::new(c, pipeline.units(c))),
            completed: Vec::new(),
            commit_queue: CommitQueue::new(),
            cycle: 0,
            next_tag: Tag::FIRST,
            expected_tag: Tag::FIRST,
            trace_exhausted: false,
            fetch_width: pipeline.fetch_width,
            retired: config.general.record_timeline.then(Vec::new),
            stats: SimStats::default(),
            timeline: config.general.record_timeline.then(Timeline::new),
        }
    }

    /// Reservation-station pool of `class`.
    #[inline]
    pub const fn pool(&self, class: UnitClass) -> &ReservationPool {
        &self.pools[class.index()]
    }

    /// Functional-unit bank of `class`.
    #[inline]
    pub const fn bank(&self, class: UnitClass) -> &FunctionalUnitBank {
        &self.banks[class.index()]
    }

    /// Instructions fetched so far.
    #[inline]
    pub const fn fetched(&self) -> u64 {
        self.next_tag.0 - 1
    }

    /// True once the trace is exhausted and every structure is empty.
    pub fn is_drained(&self) -> bool {
        self.trace_exhausted
            && self.dispatch_queue.is_empty()
            && self.pools.iter().all(ReservationPool::is_empty)
            && self.completed.is_empty()
            && self.commit_queue.is_empty()
    }

    /// Records `stage` of `tag` at the current cycle.
    pub fn stamp(&mut self, tag: Tag, stage: Stage) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.stamp(tag, stage, self.cycle);
        }
    }
}
