//! LRA Tracker Module
//!
//! Implements Least Recently Added tracking: eviction follows insertion order
//! and reads never change it.

use crate::cache::chain::Chain;
use crate::cache::policy::EvictionPolicy;

// == Insertion Order ==
/// Tracks arrival order for least-recently-added eviction.
///
/// Every put appends a node, even for a key that is already present, so a
/// re-put key keeps its original age until that older node is ejected or
/// removed. Head = oldest arrival, tail = newest.
#[derive(Debug)]
pub struct InsertionOrder<K> {
    chain: Chain<K>,
}

impl<K> Default for InsertionOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> InsertionOrder<K> {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    // == Peek Oldest ==
    /// Returns the next key to be ejected without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.chain.front()
    }
}

impl<K: Clone + PartialEq, V> EvictionPolicy<K, V> for InsertionOrder<K> {
    fn notify_inserted(&mut self, key: &K, _value: &V) {
        self.chain.push_back(key.clone());
    }

    // Only the newest node for the key goes; older duplicates stay.
    fn notify_removed(&mut self, key: &K, _value: Option<&V>) {
        if let Some(cursor) = self.chain.rposition(|k| k == key) {
            self.chain.unlink(cursor);
        }
    }

    fn select_victim(&mut self) -> Option<K> {
        self.chain.pop_front()
    }

    fn clear(&mut self) {
        self.chain.clear();
    }

    fn ordering(&self) -> Vec<&K> {
        self.chain.iter().collect()
    }

    fn tracked(&self) -> usize {
        self.chain.len()
    }
}
