//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with weighted capacity
//! accounting and a pluggable eviction policy.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::cache::{
    AccessOrder, CacheStats, EvictionPolicy, InsertionOrder, SimpleSizeCalculator, SizeCalculator,
};
use crate::error::{CacheError, Result};

/// Cache evicting the least recently used entry.
///
/// Requires `V: Clone`: the access tracker keeps its own copy of each value
/// and refreshes it on every get and put.
pub type LruCache<K, V, S = SimpleSizeCalculator> = BoundedCache<K, V, AccessOrder<K, V>, S>;

/// Cache evicting the least recently added entry.
pub type LraCache<K, V, S = SimpleSizeCalculator> = BoundedCache<K, V, InsertionOrder<K>, S>;

// == Bounded Cache ==
/// Key-value cache whose total entry weight never exceeds a fixed capacity.
///
/// Weights come from the size calculator `S`; which entries leave when room
/// is needed is decided by the policy `P`. The running `size` always equals
/// the sum of the weights of the stored entries and is only changed through
/// `grow` and `shrink`.
///
/// The cache has no internal locking. Share it across threads only behind an
/// external lock.
#[derive(Debug)]
pub struct BoundedCache<K, V, P, S = SimpleSizeCalculator> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Eviction ordering
    policy: P,
    /// Entry weight strategy
    calculator: S,
    /// Activity counters
    stats: CacheStats,
    /// Maximum total weight
    capacity: usize,
    /// Current total weight
    size: usize,
}

impl<K, V, P, S> BoundedCache<K, V, P, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V> + Default,
    S: SizeCalculator<K, V> + Default,
{
    // == Constructor ==
    /// Creates an empty cache with the default policy and size calculator.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, P::default(), S::default())
    }
}

impl<K, V, P, S> BoundedCache<K, V, P, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V> + Default,
    S: SizeCalculator<K, V>,
{
    /// Creates an empty cache weighing entries with `calculator`.
    pub fn with_calculator(capacity: usize, calculator: S) -> Self {
        Self::with_policy(capacity, P::default(), calculator)
    }
}

impl<K, V, P, S> BoundedCache<K, V, P, S>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K, V>,
    S: SizeCalculator<K, V>,
{
    /// Creates an empty cache from an explicit policy and calculator.
    pub fn with_policy(capacity: usize, policy: P, calculator: S) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            calculator,
            stats: CacheStats::new(),
            capacity,
            size: 0,
        }
    }

    // == Get ==
    /// Retrieves a value by key and reports the access to the policy.
    ///
    /// A missing key is not an error; it yields `None`.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                self.policy.notify_accessed(key, value);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without touching the policy or the statistics.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    // == Contains ==
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Put ==
    /// Stores a key-value pair, evicting entries until it fits.
    ///
    /// The growth of the put is the new entry's weight minus the weight of
    /// the value it replaces. Several entries may be evicted to admit one
    /// heavy entry, but never more than needed.
    ///
    /// # Errors
    /// Returns [`CacheError::SizeLimitExceeded`] when the new entry's weight
    /// is larger than the capacity, i.e. it could not fit even in an empty
    /// cache. This covers every put whose growth alone exceeds capacity. The
    /// cache is left untouched.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        let incoming = self.calculator.size_of(&key, Some(&value));
        let mut outgoing = self.calculator.size_of(&key, self.entries.get(&key));

        if incoming > self.capacity {
            self.stats.record_rejection();
            warn!(
                attempted = incoming,
                capacity = self.capacity,
                "put rejected by size limit"
            );
            return Err(CacheError::SizeLimitExceeded {
                attempted: incoming,
                capacity: self.capacity,
            });
        }

        // `size >= outgoing` and `capacity >= incoming` hold throughout, so
        // neither side of the comparison can underflow.
        let mut evicted = 0usize;
        while self.size - outgoing > self.capacity - incoming {
            let Some(victim) = self.next_victim() else {
                break;
            };
            let victim_value = self.entries.remove(&victim);
            if victim == key {
                // The replaced value is gone already; settle its weight now.
                self.shrink(outgoing);
                outgoing = 0;
                continue;
            }
            if victim_value.is_some() {
                evicted += 1;
                self.stats.record_eviction();
            }
            let weight = self.calculator.size_of(&victim, victim_value.as_ref());
            self.shrink(weight);
        }
        if evicted > 0 {
            debug!(
                evicted,
                incoming,
                outgoing,
                size = self.size,
                "evicted entries to admit put"
            );
        }

        self.policy.notify_inserted(&key, &value);
        self.entries.insert(key, value);
        self.shrink(outgoing);
        self.grow(incoming);
        Ok(())
    }

    // == Remove ==
    /// Removes an entry by key and returns its value.
    ///
    /// Removing a missing key changes nothing; the policy is still notified.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.entries.remove(key);
        let weight = self.calculator.size_of(key, value.as_ref());
        self.shrink(weight);
        self.policy.notify_removed(key, value.as_ref());
        value
    }

    // == Clear ==
    /// Removes all entries and ordering metadata. Capacity is unchanged.
    pub fn clear(&mut self) {
        trace!(entries = self.entries.len(), size = self.size, "clearing cache");
        self.entries.clear();
        self.policy.clear();
        self.size = 0;
    }

    // == Queries ==
    /// Returns the total weight of the stored entries.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the maximum total weight.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    /// Keys in eviction order, next victim first.
    pub fn ordering(&self) -> Vec<&K> {
        self.policy.ordering()
    }

    /// Returns the eviction policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.with_occupancy(self.entries.len(), self.size)
    }

    // Falls back to an arbitrary stored key if the policy has lost track of
    // the store; `None` only when the store is empty too.
    fn next_victim(&mut self) -> Option<K> {
        if let Some(victim) = self.policy.select_victim() {
            return Some(victim);
        }
        let fallback = self.entries.keys().next().cloned();
        if fallback.is_some() {
            warn!(
                entries = self.entries.len(),
                "eviction policy yielded no victim, evicting an arbitrary entry"
            );
        }
        fallback
    }

    fn grow(&mut self, weight: usize) {
        self.size += weight;
    }

    fn shrink(&mut self, weight: usize) {
        self.size -= weight;
    }
}
