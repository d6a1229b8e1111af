//! Bounded Cache demo driver
//!
//! Builds a cache from environment configuration, replays a deterministic
//! workload against it and prints the resulting statistics as JSON.

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::cache::{
    BoundedCache, CacheStats, EvictionPolicy, LraCache, LruCache, SizeCalculator,
    StringLengthSizeCalculator,
};
use bounded_cache::config::{Config, PolicyKind, SizingKind};
use bounded_cache::CacheError;

/// Final report printed on stdout.
#[derive(Debug, Serialize)]
struct Report {
    config: Config,
    stats: CacheStats,
    hit_rate: f64,
}

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}, sizing={}, operations={}, key_space={}",
        config.capacity, config.policy, config.sizing, config.operations, config.key_space
    );

    let stats = match (config.policy, config.sizing) {
        (PolicyKind::Lru, SizingKind::Entries) => {
            let cache: LruCache<String, String> = LruCache::new(config.capacity);
            run_workload(cache, &config)
        }
        (PolicyKind::Lru, SizingKind::Length) => {
            let cache: LruCache<String, String, StringLengthSizeCalculator> =
                LruCache::with_calculator(config.capacity, StringLengthSizeCalculator);
            run_workload(cache, &config)
        }
        (PolicyKind::Lra, SizingKind::Entries) => {
            let cache: LraCache<String, String> = LraCache::new(config.capacity);
            run_workload(cache, &config)
        }
        (PolicyKind::Lra, SizingKind::Length) => {
            let cache: LraCache<String, String, StringLengthSizeCalculator> =
                LraCache::with_calculator(config.capacity, StringLengthSizeCalculator);
            run_workload(cache, &config)
        }
    };

    info!(
        "Workload complete: hits={}, misses={}, evictions={}, rejections={}",
        stats.hits, stats.misses, stats.evictions, stats.rejections
    );

    let report = Report {
        hit_rate: stats.hit_rate(),
        config,
        stats,
    };
    let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
    println!("{json}");
    Ok(())
}

/// Replays a skewed read/write mix: every third operation is a put, the rest
/// are gets, and low-numbered keys are drawn more often than high ones.
fn run_workload<P, S>(mut cache: BoundedCache<String, String, P, S>, config: &Config) -> CacheStats
where
    P: EvictionPolicy<String, String>,
    S: SizeCalculator<String, String>,
{
    for op in 0..config.operations {
        let key = workload_key(op, config.key_space);
        if op % 3 == 0 {
            let value = "v".repeat(1 + op % 8);
            match cache.put(key, value) {
                Ok(()) => {}
                Err(err @ CacheError::SizeLimitExceeded { .. }) => {
                    debug!(op, %err, "skipping put");
                }
            }
        } else {
            cache.get(&key);
        }
    }
    debug!(size = cache.size(), capacity = cache.capacity(), "final cache size");
    cache.stats()
}

/// Maps an operation number onto a key. Reduced modulo `key_space` before
/// squaring so large operation counts cannot overflow.
fn workload_key(op: usize, key_space: usize) -> String {
    let key_space = key_space.max(1);
    let r = op % key_space;
    let slot = r.wrapping_mul(r).wrapping_add(r.wrapping_mul(7)) % key_space;
    format!("key-{}", slot / 2 + (slot % 2) * (slot / 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_key_stays_in_key_space() {
        for op in 0..200 {
            let key = workload_key(op, 16);
            let n: usize = key.trim_start_matches("key-").parse().unwrap();
            assert!(n < 16, "{key} out of range");
        }
    }

    #[test]
    fn test_workload_key_handles_huge_operation_numbers() {
        for op in [usize::MAX, usize::MAX - 1, usize::MAX / 2, 1 << 40] {
            let key = workload_key(op, 128);
            assert!(key.starts_with("key-"));
        }
        // Degenerate key spaces collapse to a single key
        assert_eq!(workload_key(usize::MAX, 0), "key-0");
        assert_eq!(workload_key(12345, 1), "key-0");
    }

    #[test]
    fn test_workload_key_is_deterministic() {
        assert_eq!(workload_key(0, 128), "key-0");
        assert_eq!(workload_key(3, 128), workload_key(3, 128));
    }
}
