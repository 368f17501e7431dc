//! Cache Module
//!
//! Namespaced in-memory key-value storage with TTL expiration.
//!
//! A [`Registry`] hands out one [`CacheTable`] per namespace. Each table
//! expires items lazily on access and, when its cleaner runs, actively on a
//! fixed interval.

mod item;
mod registry;
pub(crate) mod sweeper;
pub(crate) mod table;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use item::{CacheItem, Expiry, Ttl};
pub use registry::Registry;
pub use sweeper::MIN_SWEEP_INTERVAL;
pub use table::CacheTable;
