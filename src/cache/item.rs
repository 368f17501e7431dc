//! Cache Item Module
//!
//! Defines a single stored value together with its expiry encoding.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Ttl ==
/// Time-to-live requested by a caller when storing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// No TTL given; the item never expires.
    Unset,
    /// The caller explicitly asked for no expiry.
    Forever,
    /// The item dies once this much time has elapsed.
    After(Duration),
}

impl Ttl {
    /// Decodes the signed millisecond encoding used on the wire.
    ///
    /// `0` means unset, any negative number means forever and a positive
    /// number is a lifetime in milliseconds.
    pub fn from_millis(ms: i64) -> Self {
        match ms {
            0 => Ttl::Unset,
            ms if ms < 0 => Ttl::Forever,
            ms => Ttl::After(Duration::from_millis(ms as u64)),
        }
    }
}

// == Expiry ==
/// Absolute expiry of a stored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Stored without a TTL.
    Unset,
    /// Stored with an explicit "never expire" request.
    Never,
    /// Logically dead once this instant is reached.
    At(Instant),
}

impl Expiry {
    /// Resolves a requested TTL against `now`.
    ///
    /// A lifetime too long to represent as an instant never expires.
    pub fn from_ttl(ttl: Ttl, now: Instant) -> Self {
        match ttl {
            Ttl::Unset => Expiry::Unset,
            Ttl::Forever => Expiry::Never,
            Ttl::After(d) => now.checked_add(d).map_or(Expiry::Never, Expiry::At),
        }
    }

    /// Returns true if an item with this expiry is dead at `now`.
    pub fn has_passed(&self, now: Instant) -> bool {
        match self {
            Expiry::At(at) => *at <= now,
            Expiry::Unset | Expiry::Never => false,
        }
    }

    /// Returns true for both immortal encodings.
    pub fn is_immortal(&self) -> bool {
        !matches!(self, Expiry::At(_))
    }
}

// == Cache Item ==
/// A stored value plus its expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheItem {
    /// Opaque payload, returned exactly as stored
    pub value: Value,
    pub expiry: Expiry,
}

impl CacheItem {
    // == Constructor ==
    /// Creates an item whose expiry is computed from `ttl` at the current instant.
    pub fn new(value: Value, ttl: Ttl) -> Self {
        Self {
            value,
            expiry: Expiry::from_ttl(ttl, Instant::now()),
        }
    }

    // == Is Alive ==
    /// Checks whether the item is still alive at `now`.
    pub fn is_alive(&self, now: Instant) -> bool {
        !self.expiry.has_passed(now)
    }
}
