//! Registry Module
//!
//! Maps namespace names to cache tables, creating tables on first use.
//! Tables are never removed or replaced once created.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::CacheTable;

// == Registry ==
/// Thread-safe set of named cache tables.
#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<HashMap<String, Arc<CacheTable>>>,
    /// Cleaner interval applied to every table this registry creates
    cleanup_interval: Option<Duration>,
}

impl Registry {
    // == Constructor ==
    /// Creates an empty registry whose tables start with their cleaner stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry whose tables start a cleaner with `interval`
    /// once they first store an item that can expire.
    ///
    /// Looking a table up never spawns anything; the first expiring `set`
    /// must happen within a tokio runtime.
    pub fn with_cleanup_interval(interval: Duration) -> Self {
        Self {
            tables: RwLock::default(),
            cleanup_interval: Some(interval),
        }
    }

    // == Store ==
    /// Returns the table named `name`, creating it if it does not exist yet.
    ///
    /// Concurrent callers asking for the same new name all receive the same
    /// instance. The common path only takes the shared lock.
    pub fn store(&self, name: &str) -> Arc<CacheTable> {
        if let Some(table) = self.tables.read().get(name) {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write();
        // Another caller may have created it between the two locks.
        if let Some(table) = tables.get(name) {
            return Arc::clone(table);
        }

        let table = Arc::new(match self.cleanup_interval {
            Some(interval) => CacheTable::with_cleanup_interval(name, interval),
            None => CacheTable::new(name),
        });
        tables.insert(name.to_string(), Arc::clone(&table));
        debug!(table = name, "Created cache table");

        table
    }

    // == List ==
    /// Snapshot of the namespace names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of tables created so far.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    // == Shutdown ==
    /// Stops the cleaner of every table and waits for each loop to exit.
    pub async fn stop_all_cleaners(&self) {
        let tables: Vec<Arc<CacheTable>> = self.tables.read().values().cloned().collect();
        for table in tables {
            table.stop_cleaner().await;
        }
    }
}
