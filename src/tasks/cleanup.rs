//! TTL Cleanup Task
//!
//! Background loop that periodically removes expired items from one table.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::table::{purge_expired, ItemMap};

/// Spawns a background task that sweeps expired items every `interval`.
///
/// The loop checks `token` at every tick boundary and exits once it is
/// cancelled. A sweep that has already started always runs to completion.
/// The task only holds a weak reference to the items, so it also exits once
/// the owning table is dropped.
///
/// # Arguments
/// * `table` - Table name, used for logging
/// * `items` - Weak reference to the table's item map
/// * `interval` - Time between sweeps, must be non-zero
/// * `token` - Cancellation signal
pub(crate) fn spawn_cleanup_task(
    table: String,
    items: Weak<RwLock<ItemMap>>,
    interval: Duration,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            table = %table,
            "Starting TTL cleanup task with interval of {:?}", interval
        );

        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let Some(live) = items.upgrade() else {
                debug!(table = %table, "Table dropped, ending cleanup task");
                break;
            };

            let removed = purge_expired(&live, std::time::Instant::now());
            if removed > 0 {
                info!(table = %table, "TTL cleanup: removed {} expired items", removed);
            } else {
                debug!(table = %table, "TTL cleanup: no expired items found");
            }
        }

        debug!(table = %table, "TTL cleanup task exited");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheItem, Ttl};
    use serde_json::json;
    use std::sync::Arc;

    fn items_with(entries: Vec<(&str, Ttl)>) -> Arc<RwLock<ItemMap>> {
        let map = entries
            .into_iter()
            .map(|(key, ttl)| (key.to_string(), CacheItem::new(json!(key), ttl)))
            .collect();
        Arc::new(RwLock::new(map))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_items() {
        let items = items_with(vec![("expire_soon", Ttl::After(Duration::from_millis(20)))]);
        let token = CancellationToken::new();

        let handle = spawn_cleanup_task(
            "t".to_string(),
            Arc::downgrade(&items),
            Duration::from_millis(50),
            token.clone(),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(items.read().is_empty(), "Expired item should have been swept");

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_live_items() {
        let items = items_with(vec![
            ("long_lived", Ttl::After(Duration::from_secs(3600))),
            ("unset", Ttl::Unset),
            ("forever", Ttl::Forever),
        ]);
        let token = CancellationToken::new();

        let handle = spawn_cleanup_task(
            "t".to_string(),
            Arc::downgrade(&items),
            Duration::from_millis(20),
            token.clone(),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(items.read().len(), 3);

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_cleanup_task_exits_on_cancel() {
        let items = items_with(vec![]);
        let token = CancellationToken::new();

        let handle = spawn_cleanup_task(
            "t".to_string(),
            Arc::downgrade(&items),
            Duration::from_secs(3600),
            token.clone(),
        );

        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("task should exit promptly after cancel")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cleanup_task_exits_when_table_dropped() {
        let items = items_with(vec![]);
        let token = CancellationToken::new();

        let handle = spawn_cleanup_task(
            "t".to_string(),
            Arc::downgrade(&items),
            Duration::from_millis(10),
            token,
        );

        drop(items);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("task should exit once the table is gone")
            .unwrap();
    }
}
