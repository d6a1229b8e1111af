//! Bounded Cache - an in-memory, weight-bounded key-value cache
//!
//! Capacity is measured in weights assigned by a size calculator, and the
//! entry to evict is chosen by a pluggable policy: least recently added or
//! least recently used.
//!
//! ```
//! use bounded_cache::cache::LruCache;
//!
//! let mut cache: LruCache<String, String> = LruCache::new(2);
//! cache.put("test".to_string(), "123".to_string()).unwrap();
//! cache.put("another test".to_string(), "456".to_string()).unwrap();
//! cache.get(&"test".to_string());
//! cache.put("final test".to_string(), "789".to_string()).unwrap();
//!
//! assert!(cache.get(&"another test".to_string()).is_none());
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedCache, EvictionPolicy, LraCache, LruCache, SizeCalculator};
pub use config::Config;
pub use error::{CacheError, Result};
