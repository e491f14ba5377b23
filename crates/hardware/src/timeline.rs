//! Per-instruction stage timeline.
//!
//! Each entry stamps the cycle in which the engine moved an instruction
//! through a stage. Stamps are observations only; the engine never reads
//! them back.

use std::io::{self, Write};

use serde::Serialize;

use crate::common::{Tag, UnitClass};
use crate::trace::InstRecord;

/// Pipeline events recorded after fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Admitted to a reservation-station pool.
    Dispatch,
    /// Issued into a functional-unit lane.
    Schedule,
    /// Left the last slot of its lane.
    Execute,
    /// Result broadcast to waiting stations.
    StateUpdate,
    /// Retired in program order.
    Commit,
}

/// Stage cycles of one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InstTiming {
    /// Program-order tag.
    pub tag: Tag,
    /// Address from the trace.
    pub address: u32,
    /// Unit class.
    pub unit: UnitClass,
    /// Cycle the instruction entered the dispatch queue.
    pub fetch: Option<u64>,
    /// Cycle it was admitted to a reservation station.
    pub dispatch: Option<u64>,
    /// Cycle it was issued to a functional unit.
    pub schedule: Option<u64>,
    /// Cycle it left its functional unit.
    pub execute: Option<u64>,
    /// Cycle its tag was broadcast.
    pub state_update: Option<u64>,
    /// Cycle it retired.
    pub commit: Option<u64>,
}

impl InstTiming {
    /// Mutable stamp slot for `stage`.
    const fn slot(&mut self, stage: Stage) -> &mut Option<u64> {
        match stage {
            Stage::Dispatch => &mut self.dispatch,
            Stage::Schedule => &mut self.schedule,
            Stage::Execute => &mut self.execute,
            Stage::StateUpdate => &mut self.state_update,
            Stage::Commit => &mut self.commit,
        }
    }
}

/// Timeline of every fetched instruction, indexed by tag.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<InstTiming>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the entry of a freshly fetched instruction.
    ///
    /// # Panics
    ///
    /// Panics if `inst` is not the next tag in program order.
    pub fn record_fetch(&mut self, inst: &InstRecord, cycle: u64) {
        assert_eq!(
            inst.tag.0,
            self.entries.len() as u64 + 1,
            "timeline: fetch out of program order"
        );
        self.entries.push(InstTiming {
            tag: inst.tag,
            address: inst.address,
            unit: inst.unit,
            fetch: Some(cycle),
            dispatch: None,
            schedule: None,
            execute: None,
            state_update: None,
            commit: None,
        });
    }

    /// Stamps `stage` of `tag` with `cycle`. Unknown tags are ignored.
    pub fn stamp(&mut self, tag: Tag, stage: Stage, cycle: u64) {
        if let Some(entry) = Self::position(tag).and_then(|i| self.entries.get_mut(i)) {
            *entry.slot(stage) = Some(cycle);
        }
    }

    /// Entry for `tag`.
    pub fn get(&self, tag: Tag) -> Option<&InstTiming> {
        Self::position(tag).and_then(|i| self.entries.get(i))
    }

    /// All entries in program order.
    pub fn entries(&self) -> &[InstTiming] {
        &self.entries
    }

    /// Number of recorded instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was fetched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the timeline as a tab-separated table.
    ///
    /// # Errors
    ///
    /// Propagates any write failure of `out`.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let cell = |c: Option<u64>| c.map_or_else(|| "-".to_owned(), |c| c.to_string());
        writeln!(out, "INST\tFETCH\tDISP\tSCHED\tEXEC\tSTATE\tCOMMIT")?;
        for e in &self.entries {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                e.tag,
                cell(e.fetch),
                cell(e.dispatch),
                cell(e.schedule),
                cell(e.execute),
                cell(e.state_update),
                cell(e.commit),
            )?;
        }
        Ok(())
    }

    fn position(tag: Tag) -> Option<usize> {
        tag.0.checked_sub(1).map(|i| i as usize)
    }
}
