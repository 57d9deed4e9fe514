//! Memo Statistics Module
//!
//! Tracks how often the memo cache served, recomputed, and evicted values.

use serde::Serialize;

// == Memo Stats ==
/// Counters describing memo cache behavior.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoStats {
    /// Number of calls answered from the cache
    pub hits: u64,
    /// Number of calls that ran the compute function
    pub computations: u64,
    /// Number of entries evicted to respect the capacity
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Maximum number of entries the cache keeps
    pub capacity: usize,
}

impl MemoStats {
    // == Constructor ==
    /// Creates a new MemoStats with all counters at zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + computations), or 0.0 if no calls have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.computations;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_computation(&mut self) {
        self.computations += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
