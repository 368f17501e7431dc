//! Request DTOs for the cache server API
//!
//! Defines the query parameters accepted by the write endpoint.

use serde::Deserialize;

use crate::cache::Ttl;

/// Query parameters for `POST /kv/:id/:key`
///
/// # Fields
/// - `data`: JSON-encoded value to store
/// - `ttl`: Optional signed TTL in milliseconds (omitted = never expire)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetParams {
    /// The JSON-encoded value
    #[serde(default)]
    pub data: Option<String>,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl: Option<i64>,
}

impl SetParams {
    /// Returns the raw `data` parameter, or None if it is missing or empty.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref().filter(|d| !d.is_empty())
    }

    /// TTL to store with. Values written without one never expire.
    pub fn ttl(&self) -> Ttl {
        self.ttl.map(Ttl::from_millis).unwrap_or(Ttl::Forever)
    }
}
