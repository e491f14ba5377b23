//! Dispatch queue: bounded FIFO between fetch and the reservation stations.

use std::collections::VecDeque;

use crate::trace::InstRecord;

/// Fetched instructions waiting for a reservation station, oldest first.
#[derive(Debug)]
pub struct DispatchQueue {
    queue: VecDeque<InstRecord>,
    capacity: usize,
}

impl DispatchQueue {
    /// Creates an empty queue holding at most `capacity` instructions.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of queued instructions.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of queued instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// True when fetch must stop this cycle.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    /// Oldest queued instruction.
    pub fn front(&self) -> Option<&InstRecord> {
        self.queue.front()
    }

    /// Appends a fetched instruction.
    ///
    /// # Panics
    ///
    /// Panics if the queue is full.
    pub fn push(&mut self, inst: InstRecord) {
        assert!(
            !self.is_full(),
            "dispatch queue overflow: tag {} with {} entries",
            inst.tag,
            self.capacity
        );
        self.queue.push_back(inst);
    }

    /// Removes the oldest instruction.
    pub fn pop(&mut self) -> Option<InstRecord> {
        self.queue.pop_front()
    }

    /// Queued instructions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &InstRecord> {
        self.queue.iter()
    }
}
