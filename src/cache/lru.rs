//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use crate::cache::chain::Chain;
use crate::cache::policy::EvictionPolicy;

// == Usage Node ==
#[derive(Debug)]
struct Usage<K, V> {
    key: K,
    value: V,
}

// == Access Order ==
/// Tracks access order for LRU eviction strategy.
///
/// Nodes are kept in a chain where:
/// - Head = Least recently used (next victim)
/// - Tail = Most recently used
///
/// Each key has at most one node; gets and puts both move it to the tail.
///
/// Nodes hold their own copy of the value: every touch clones `V` into the
/// node, so each live entry is stored twice (once in the cache, once here).
/// For large values, store them behind `Rc`/`Arc` to keep the copy cheap.
#[derive(Debug)]
pub struct AccessOrder<K, V> {
    chain: Chain<Usage<K, V>>,
}

impl<K, V> Default for AccessOrder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> AccessOrder<K, V> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.chain.front().map(|usage| &usage.key)
    }

    // == Peek Newest ==
    /// Returns the most recently used entry.
    pub fn peek_newest(&self) -> Option<(&K, &V)> {
        self.chain.back().map(|usage| (&usage.key, &usage.value))
    }
}

impl<K: Clone + PartialEq, V: Clone> AccessOrder<K, V> {
    // == Touch ==
    /// Marks a key as recently used (moves it to the tail).
    ///
    /// If the key is tracked its node is relinked and its value refreshed.
    /// If the key is new, a node is appended. Either way `value` is cloned.
    pub fn touch(&mut self, key: &K, value: &V) {
        match self.chain.position(|usage| usage.key == *key) {
            Some(cursor) => {
                self.chain.move_to_back(cursor);
                if let Some(usage) = self.chain.get_mut(cursor) {
                    usage.value = value.clone();
                }
            }
            None => self.chain.push_back(Usage {
                key: key.clone(),
                value: value.clone(),
            }),
        }
    }
}

impl<K: Clone + PartialEq, V: Clone> EvictionPolicy<K, V> for AccessOrder<K, V> {
    fn notify_accessed(&mut self, key: &K, value: &V) {
        self.touch(key, value);
    }

    fn notify_inserted(&mut self, key: &K, value: &V) {
        self.touch(key, value);
    }

    fn notify_removed(&mut self, key: &K, _value: Option<&V>) {
        if let Some(cursor) = self.chain.position(|usage| usage.key == *key) {
            self.chain.unlink(cursor);
        }
    }

    fn select_victim(&mut self) -> Option<K> {
        self.chain.pop_front().map(|usage| usage.key)
    }

    fn clear(&mut self) {
        self.chain.clear();
    }

    fn ordering(&self) -> Vec<&K> {
        self.chain.iter().map(|usage| &usage.key).collect()
    }

    fn tracked(&self) -> usize {
        self.chain.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    use std::rc::Rc;

    type Tracker = AccessOrder<String, u32>;

    fn touch_all(lru: &mut Tracker, keys: &[&str]) {
        for key in keys {
            lru.touch(&key.to_string(), &0);
        }
    }

    fn order(lru: &Tracker) -> Vec<&str> {
        lru.ordering().into_iter().map(String::as_str).collect()
    }

    #[test]
    fn test_lru_new() {
        let lru = Tracker::new();
        assert_eq!(lru.tracked(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_touch_new_key() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["key1", "key2", "key3"]);

        assert_eq!(lru.tracked(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_lru_touch_highest_priority_key() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["A", "B", "C"]);
        touch_all(&mut lru, &["A"]);
        assert_eq!(order(&lru), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_lru_touch_mid_priority_key() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["A", "B", "C"]);
        touch_all(&mut lru, &["B"]);
        assert_eq!(order(&lru), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_lru_touch_lowest_priority_key_has_no_effect() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["A", "B", "C"]);
        touch_all(&mut lru, &["C"]);
        assert_eq!(order(&lru), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_lru_touch_refreshes_value() {
        let mut lru = Tracker::new();
        lru.touch(&"a".to_string(), &1);
        lru.touch(&"b".to_string(), &2);
        lru.touch(&"a".to_string(), &3);

        assert_eq!(lru.peek_newest(), Some((&"a".to_string(), &3)));
    }

    #[test]
    fn test_lru_node_keeps_one_copy_of_value() {
        let value = Rc::new("payload".to_string());
        let mut lru: AccessOrder<String, Rc<String>> = AccessOrder::new();

        lru.touch(&"a".to_string(), &value);
        assert_eq!(Rc::strong_count(&value), 2);

        // A refresh replaces the copy instead of adding another
        lru.touch(&"a".to_string(), &value);
        assert_eq!(Rc::strong_count(&value), 2);

        EvictionPolicy::<String, Rc<String>>::clear(&mut lru);
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["key1", "key2", "key3"]);

        assert_eq!(lru.select_victim(), Some("key1".to_string()));
        assert_eq!(lru.tracked(), 2);

        assert_eq!(lru.select_victim(), Some("key2".to_string()));
        assert_eq!(lru.tracked(), 1);
    }

    #[test]
    fn test_lru_evict_empty() {
        let mut lru = Tracker::new();
        assert_eq!(lru.select_victim(), None);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["key1", "key2", "key3"]);

        lru.notify_removed(&"key2".to_string(), None);

        assert_eq!(order(&lru), vec!["key1", "key3"]);
    }

    #[test]
    fn test_lru_remove_nonexistent_key() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["key1", "key2"]);

        // Should not panic or affect existing keys
        lru.notify_removed(&"nonexistent".to_string(), None);

        assert_eq!(order(&lru), vec!["key1", "key2"]);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["a", "b", "c"]);
        touch_all(&mut lru, &["a", "c", "b"]);

        assert_eq!(lru.select_victim(), Some("a".to_string()));
        assert_eq!(lru.select_victim(), Some("c".to_string()));
        assert_eq!(lru.select_victim(), Some("b".to_string()));
    }

    #[test]
    fn test_lru_touch_same_key_multiple_times() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["key1", "key1", "key1"]);

        // Should only have one entry
        assert_eq!(lru.tracked(), 1);
        assert_eq!(lru.select_victim(), Some("key1".to_string()));
        assert_eq!(lru.tracked(), 0);
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = Tracker::new();
        touch_all(&mut lru, &["a", "b"]);
        lru.clear();
        assert_eq!(lru.tracked(), 0);
        assert_eq!(lru.select_victim(), None);
    }
}
