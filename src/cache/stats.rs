//! Cache Statistics Module
//!
//! Counters kept by the engine as it serves lookups and puts. Lookup counters
//! feed the hit rate; `evictions` and `rejections` record how often capacity
//! forced an entry out or refused one outright.

use serde::Serialize;

// == Cache Stats ==
/// Activity counters plus a point-in-time view of occupancy.
///
/// The engine owns the running counters; `total_entries` and `weighted_size`
/// are filled in when a snapshot is taken via [`CacheStats::with_occupancy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Stored entries dropped to make room for a put. A key ejecting its own
    /// older value is not counted.
    pub evictions: u64,
    /// Puts refused because the entry alone outweighs the capacity
    pub rejections: u64,
    pub total_entries: usize,
    /// Summed weight of the stored entries, as computed by the size calculator
    pub weighted_size: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the counters and attaches the current occupancy.
    pub fn with_occupancy(&self, total_entries: usize, weighted_size: usize) -> Self {
        Self {
            total_entries,
            weighted_size,
            ..self.clone()
        }
    }

    /// Gets that either hit or missed.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    // == Recording ==

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }
}
