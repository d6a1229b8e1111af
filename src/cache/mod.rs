//! Cache Module
//!
//! Provides a weight-bounded cache engine with pluggable eviction policies
//! and size calculators.

mod chain;
mod lra;
mod lru;
mod policy;
mod size;
mod stats;
mod store;


// Re-export public types
pub use lra::InsertionOrder;
pub use lru::AccessOrder;
pub use policy::EvictionPolicy;
pub use size::{FnSizeCalculator, SimpleSizeCalculator, SizeCalculator, StringLengthSizeCalculator};
pub use stats::CacheStats;
pub use store::{BoundedCache, LraCache, LruCache};
