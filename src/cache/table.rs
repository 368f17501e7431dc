//! Cache Table Module
//!
//! One namespace of the cache: a concurrent key-value map with TTL expiry.
//!
//! Expired items are removed lazily by `get`/`exists` and actively by the
//! table's cleaner. `count` performs no expiry check and therefore includes
//! items that are dead but not yet removed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tracing::debug;

use crate::cache::sweeper::Sweeper;
use crate::cache::{CacheItem, Ttl};

pub(crate) type ItemMap = HashMap<String, CacheItem>;
pub(crate) type SharedItems = Arc<RwLock<ItemMap>>;

// == Cache Table ==
/// A named, thread-safe key-value table with per-item TTL.
#[derive(Debug)]
pub struct CacheTable {
    name: String,
    items: SharedItems,
    sweeper: Sweeper,
    /// Cleaner interval to start with on the first item that can expire
    pending_cleaner: Mutex<Option<Duration>>,
}

impl CacheTable {
    // == Constructor ==
    /// Creates an empty table. Its cleaner starts out stopped.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Arc::new(RwLock::new(HashMap::new())),
            sweeper: Sweeper::new(),
            pending_cleaner: Mutex::new(None),
        }
    }

    /// Creates an empty table that starts its cleaner with `interval` the
    /// first time an item with a finite TTL is stored.
    ///
    /// Tables that only ever hold immortal items never spawn a cleaner.
    /// That first `set` must happen within a tokio runtime.
    pub fn with_cleanup_interval(name: impl Into<String>, interval: Duration) -> Self {
        let table = Self::new(name);
        *table.pending_cleaner.lock() = Some(interval);
        table
    }

    /// Name of the namespace this table serves.
    pub fn name(&self) -> &str {
        &self.name
    }

    // == Set ==
    /// Stores a value, fully replacing any previous item under `key`.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store, kept as-is
    /// * `ttl` - `Unset` and `Forever` never expire, `After(d)` expires `d` from now
    pub fn set(&self, key: impl Into<String>, value: Value, ttl: Ttl) {
        let item = CacheItem::new(value, ttl);
        let mortal = !item.expiry.is_immortal();
        self.items.write().insert(key.into(), item);

        if mortal {
            self.start_pending_cleaner();
        }
    }

    // == Get ==
    /// Returns a copy of the value if the key exists and is alive.
    ///
    /// An expired item found here is deleted before returning.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.lookup(key, |item| item.value.clone())
    }

    // == Exists ==
    /// Same liveness check as [`get`](Self::get), including lazy deletion,
    /// without cloning the value.
    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key, |_| ()).is_some()
    }

    // == Delete ==
    /// Removes `key` if present.
    pub fn delete(&self, key: &str) {
        self.items.write().remove(key);
    }

    // == Count ==
    /// Number of stored items, including expired ones not yet removed.
    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    // == Sweep ==
    /// Runs one active expiry pass immediately.
    ///
    /// Returns the number of items removed.
    pub fn sweep(&self) -> usize {
        purge_expired(&self.items, Instant::now())
    }

    // == Cleaner ==
    /// Starts the periodic cleaner, restarting it if one is already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_cleaner(&self, interval: Duration) {
        self.pending_cleaner.lock().take();
        self.sweeper.start(&self.name, &self.items, interval);
    }

    fn start_pending_cleaner(&self) {
        let pending = self.pending_cleaner.lock().take();
        if let Some(interval) = pending {
            debug!(table = %self.name, "First expiring item stored, starting cleaner");
            self.sweeper.start(&self.name, &self.items, interval);
        }
    }

    /// Stops the periodic cleaner and waits for its loop to exit.
    ///
    /// No-op when the cleaner is not running. Also discards a pending start.
    pub async fn stop_cleaner(&self) {
        self.pending_cleaner.lock().take();
        self.sweeper.stop(&self.name).await;
    }

    pub fn is_cleaner_running(&self) -> bool {
        self.sweeper.is_running()
    }

    /// Interval of the running cleaner, if any.
    pub fn cleaner_interval(&self) -> Option<Duration> {
        self.sweeper.interval()
    }

    fn lookup<T>(&self, key: &str, read: impl FnOnce(&CacheItem) -> T) -> Option<T> {
        let now = Instant::now();
        {
            let items = self.items.read();
            match items.get(key) {
                None => return None,
                Some(item) if item.is_alive(now) => return Some(read(item)),
                Some(_) => {}
            }
        }

        // Re-check under the write lock: a concurrent set may have replaced the item.
        let mut items = self.items.write();
        if items.get(key).is_some_and(|item| !item.is_alive(now)) {
            items.remove(key);
            debug!(table = %self.name, key, "Removed expired item on access");
        }
        None
    }
}

// == Purge ==
/// Removes every item whose expiry has passed at `now`.
///
/// Returns the number of items removed.
pub(crate) fn purge_expired(items: &RwLock<ItemMap>, now: Instant) -> usize {
    let mut items = items.write();
    let before = items.len();
    items.retain(|_, item| item.is_alive(now));
    before - items.len()
}
