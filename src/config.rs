//! Configuration Module
//!
//! Handles loading the demo driver's cache configuration from environment
//! variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// == Policy Kind ==
/// Which eviction policy the cache is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Least recently used
    #[default]
    Lru,
    /// Least recently added
    Lra,
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(Self::Lru),
            "lra" | "fifo" => Ok(Self::Lra),
            other => Err(format!("unknown eviction policy: {other}")),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => f.write_str("lru"),
            Self::Lra => f.write_str("lra"),
        }
    }
}

// == Sizing Kind ==
/// How entries are weighed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingKind {
    /// Every entry weighs 1
    #[default]
    Entries,
    /// Entries weigh the character length of their value
    Length,
}

impl FromStr for SizingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entries" | "count" => Ok(Self::Entries),
            "length" | "chars" => Ok(Self::Length),
            other => Err(format!("unknown sizing: {other}")),
        }
    }
}

impl fmt::Display for SizingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entries => f.write_str("entries"),
            Self::Length => f.write_str("length"),
        }
    }
}

/// Cache and workload configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Maximum total weight the cache can hold
    pub capacity: usize,
    /// Eviction policy
    pub policy: PolicyKind,
    /// Entry weighing strategy
    pub sizing: SizingKind,
    /// Number of operations the demo workload runs
    pub operations: usize,
    /// Number of distinct keys the demo workload draws from
    pub key_space: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum total weight (default: 64)
    /// - `CACHE_POLICY` - `lru` or `lra` (default: lru)
    /// - `CACHE_SIZING` - `entries` or `length` (default: entries)
    /// - `DEMO_OPERATIONS` - Workload length (default: 1000)
    /// - `DEMO_KEY_SPACE` - Distinct workload keys (default: 128)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            capacity: parse_or(&lookup, "CACHE_CAPACITY", defaults.capacity),
            policy: parse_or(&lookup, "CACHE_POLICY", defaults.policy),
            sizing: parse_or(&lookup, "CACHE_SIZING", defaults.sizing),
            operations: parse_or(&lookup, "DEMO_OPERATIONS", defaults.operations),
            key_space: parse_or(&lookup, "DEMO_KEY_SPACE", defaults.key_space),
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 64,
            policy: PolicyKind::Lru,
            sizing: SizingKind::Entries,
            operations: 1000,
            key_space: 128,
        }
    }
}
