//! Linear undo/redo timeline of grid snapshots.

use crate::grid::Grid;

#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;
#[cfg(target_arch = "wasm32")]
use web_time::SystemTime;

/// Maximum number of snapshots kept per document.
pub const MAX_HISTORY: usize = 50;

/// A committed grid and the time it was committed.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    grid: Grid,
    timestamp: SystemTime,
}

impl HistoryEntry {
    fn new(grid: Grid) -> Self {
        Self {
            grid,
            timestamp: SystemTime::now(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

/// Snapshot history with a current index.
///
/// There is always at least one entry, and `index` always points at one.
/// Committing below the newest entry drops everything after the index.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
    capacity: usize,
}

impl History {
    /// Start a timeline at `grid`, keeping up to [`MAX_HISTORY`] entries.
    pub fn new(grid: Grid) -> Self {
        Self::with_capacity(grid, MAX_HISTORY)
    }

    /// Start a timeline with a custom capacity (at least 1).
    pub fn with_capacity(grid: Grid, capacity: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::new(grid)],
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Append `grid` as the new current state.
    pub fn commit(&mut self, grid: Grid) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::new(grid));

        // Evict the oldest entries once over capacity
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
        log::debug!("History commit: {} entries, index {}", self.entries.len(), self.index);
    }

    /// Step back one entry. Returns false if already at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns false if already at the newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Drop every entry and restart the timeline at `grid`.
    pub fn reset(&mut self, grid: Grid) {
        self.entries.clear();
        self.entries.push(HistoryEntry::new(grid));
        self.index = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// The grid at the current index.
    pub fn current(&self) -> &Grid {
        &self.entries[self.index].grid
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
