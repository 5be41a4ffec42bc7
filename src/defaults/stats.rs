//! Defaults Statistics Module
//!
//! Counts reads, writes and removals served by an in-memory defaults store.

use serde::Serialize;

// == Defaults Stats ==
/// Operation counters for a defaults store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DefaultsStats {
    /// Number of value lookups, hit or miss
    pub reads: u64,
    /// Number of accepted writes
    pub writes: u64,
    /// Number of remove calls, including removals of absent keys
    pub removals: u64,
    /// Current number of entries in the store
    pub total_entries: usize,
}

impl DefaultsStats {
    // == Constructor ==
    /// Creates a new DefaultsStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_read(&mut self) {
        self.reads += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
