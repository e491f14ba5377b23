//! Commit queue for in-order retirement.
//!
//! Completed stations arrive out of program order. The queue keeps them
//! ordered by tag and only ever releases the station whose tag equals the
//! next expected one, which turns out-of-order completion into in-order
//! retirement.

use std::collections::BTreeMap;

use super::reservation::ReservationStation;
use crate::common::Tag;

/// Completed-but-not-retired stations, ordered by tag.
#[derive(Debug, Default)]
pub struct CommitQueue {
    entries: BTreeMap<Tag, ReservationStation>,
}

impl CommitQueue {
    /// Creates an empty commit queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations waiting to retire.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing waits to retire.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest tag in the queue.
    pub fn min_tag(&self) -> Option<Tag> {
        self.entries.keys().next().copied()
    }

    /// Inserts a completed station.
    ///
    /// # Panics
    ///
    /// Panics if a station with the same tag is already queued.
    pub fn push(&mut self, station: ReservationStation) {
        let tag = station.tag();
        let previous = self.entries.insert(tag, station);
        assert!(previous.is_none(), "tag {tag} completed twice");
    }

    /// Removes the minimum station if its tag equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the minimum tag is below `expected`: that instruction would
    /// retire after a younger one.
    pub fn pop_expected(&mut self, expected: Tag) -> Option<ReservationStation> {
        let min = self.min_tag()?;
        assert!(
            min >= expected,
            "tag {min} reached commit after tag {expected} was expected"
        );
        if min == expected {
            self.entries.pop_first().map(|(_, station)| station)
        } else {
            None
        }
    }

    /// Queued tags in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }
}
