//! Undo history for reverse execution
//!
//! Each forward step records a [`HistoryEntry`] before mutating anything.
//! An entry is minimal: one instruction can move at most one cursor and
//! change at most one cell, so restoring the two pointers, a single cell
//! value, and the output length undoes the step exactly. No full-tape
//! copy is ever taken; that is an invariant, not an optimization.
//!
//! The history is a bounded FIFO ring. When it is full, pushing silently
//! evicts the oldest entry: memory stays bounded and `back()` can rewind
//! at most `capacity` steps. That loss is the accepted trade-off, not an
//! error.

use std::collections::VecDeque;

/// State captured before executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Instruction pointer before the step; `None` means not yet started.
    pub instruction_pointer: Option<usize>,
    /// Tape pointer before the step.
    pub tape_pointer: usize,
    /// Value of the cell at `tape_pointer` before the step.
    pub cell: u8,
    /// Byte length of the output buffer before the step.
    pub output_len: usize,
}

/// Bounded ring of [`HistoryEntry`] snapshots, oldest evicted first.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: Option<usize>,
}

impl History {
    /// `capacity` of `None` means unbounded.
    pub fn new(capacity: Option<usize>) -> Self {
        History {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Push a snapshot, evicting the oldest entry if at capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return;
            }
            while self.entries.len() >= cap {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(entry);
    }

    /// Pop the most recent snapshot.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Drop all entries, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
