//! Eviction Policy Module
//!
//! Defines the capability a cache engine delegates eviction ordering to.

// == Eviction Policy ==
/// Keeps ordering metadata for a [`BoundedCache`](crate::cache::BoundedCache)
/// and picks victims when room is needed.
///
/// The engine calls the `notify_*` hooks after each corresponding access or
/// mutation of its store. Hooks only touch the policy's own bookkeeping: they
/// never fail and never change the engine's store or size.
pub trait EvictionPolicy<K, V> {
    /// Called after a successful lookup of `key`.
    fn notify_accessed(&mut self, _key: &K, _value: &V) {}

    /// Called after `key` has been stored with `value`.
    fn notify_inserted(&mut self, _key: &K, _value: &V) {}

    /// Called after `key` has been removed. `value` is `None` when the key
    /// was not stored.
    fn notify_removed(&mut self, _key: &K, _value: Option<&V>) {}

    /// Unlinks and returns the next key to evict.
    ///
    /// The engine removes the returned key from its store itself. `None`
    /// means the ordering is empty, which only happens when the policy and
    /// the store have drifted apart.
    fn select_victim(&mut self) -> Option<K>;

    /// Drops all ordering metadata.
    fn clear(&mut self);

    /// Tracked keys from the next victim to the most recent arrival or touch.
    fn ordering(&self) -> Vec<&K>;

    /// Number of ordering nodes currently held.
    fn tracked(&self) -> usize;
}
