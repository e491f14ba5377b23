//! Tag-based register file (rename table and scoreboard in one).
//!
//! Maps each architectural register to a ready flag and the tag of its most
//! recently dispatched producer. A register that is not ready always carries
//! the tag readers must wait for; once ready, the stored tag is stale and
//! ignored.
//!
//! Only one producer per register is tracked. A second in-flight writer
//! overwrites the first, so readers dispatched afterwards wait on the newer
//! tag and the older writer's completion no longer touches the entry.

use crate::common::{NUM_REGISTERS, RegId, Tag};

/// State of one architectural register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegEntry {
    /// Value is settled; no in-flight producer needs to be awaited.
    pub ready: bool,
    /// Tag of the latest dispatched producer, meaningful only when not ready.
    pub tag: Option<Tag>,
}

impl Default for RegEntry {
    fn default() -> Self {
        Self {
            ready: true,
            tag: None,
        }
    }
}

/// Per-register ready flags and producer tags.
///
/// Register arguments are `Option<RegId>`: `None` is the "no register"
/// operand of a trace and is accepted everywhere (always ready, never
/// written).
#[derive(Clone, Debug)]
pub struct RegisterFile {
    entries: [RegEntry; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register ready and untagged.
    pub fn new() -> Self {
        Self {
            entries: [RegEntry::default(); NUM_REGISTERS],
        }
    }

    /// Returns the stored producer tag of `reg`, whether or not it is ready.
    #[inline]
    pub const fn tag_of(&self, reg: RegId) -> Option<Tag> {
        self.entries[reg.index()].tag
    }

    /// Records `tag` as the producer of `reg`. No-op for "no register".
    pub const fn set_tag(&mut self, reg: Option<RegId>, tag: Tag) {
        if let Some(reg) = reg {
            self.entries[reg.index()].tag = Some(tag);
        }
    }

    /// Whether `reg` holds a settled value. "No register" is always ready.
    #[inline]
    pub const fn is_ready(&self, reg: Option<RegId>) -> bool {
        match reg {
            Some(reg) => self.entries[reg.index()].ready,
            None => true,
        }
    }

    /// Sets the ready flag of `reg`. No-op for "no register".
    pub const fn set_ready(&mut self, reg: Option<RegId>, ready: bool) {
        if let Some(reg) = reg {
            self.entries[reg.index()].ready = ready;
        }
    }

    /// Marks every register whose stored tag equals `tag` as ready.
    ///
    /// A register renamed again after `tag` was dispatched holds the newer
    /// tag and stays not ready.
    pub fn mark_tag_ready(&mut self, tag: Tag) {
        for entry in &mut self.entries {
            if entry.tag == Some(tag) {
                entry.ready = true;
            }
        }
    }

    /// The tag a reader of `reg` must wait for, or `None` if it can read now.
    #[inline]
    pub const fn pending_producer(&self, reg: Option<RegId>) -> Option<Tag> {
        match reg {
            Some(reg) if !self.entries[reg.index()].ready => self.entries[reg.index()].tag,
            _ => None,
        }
    }

    /// Number of registers currently waiting on a producer.
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.ready).count()
    }
}
