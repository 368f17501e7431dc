//! Sweeper Module
//!
//! Tracks whether a table's periodic cleaner is stopped or running, and owns
//! the cancellation token and task handle of the running loop.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::table::SharedItems;
use crate::tasks::spawn_cleanup_task;

/// Shortest interval accepted by [`Sweeper::start`].
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct RunningSweep {
    interval: Duration,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

// == Sweeper ==
/// Stopped/Running state of one table's cleaner.
#[derive(Debug, Default)]
pub(crate) struct Sweeper {
    running: Mutex<Option<RunningSweep>>,
}

impl Sweeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the cleanup loop. A loop that is already running is cancelled
    /// first, so at most one loop per table ever sweeps.
    pub fn start(&self, table: &str, items: &SharedItems, interval: Duration) {
        let interval = interval.max(MIN_SWEEP_INTERVAL);
        let mut running = self.running.lock();

        if let Some(previous) = running.take() {
            previous.token.cancel();
            debug!(
                table,
                "Restarting cleaner: {:?} -> {:?}", previous.interval, interval
            );
        }

        let token = CancellationToken::new();
        let handle = spawn_cleanup_task(
            table.to_string(),
            Arc::downgrade(items),
            interval,
            token.clone(),
        );

        *running = Some(RunningSweep {
            interval,
            token,
            handle,
        });
    }

    /// Cancels the running loop and waits until it has exited.
    ///
    /// Returns false if no loop was running.
    pub async fn stop(&self, table: &str) -> bool {
        let running = self.running.lock().take();
        let Some(sweep) = running else {
            return false;
        };

        sweep.token.cancel();
        if let Err(e) = sweep.handle.await {
            warn!(table, "Cleaner task ended abnormally: {}", e);
        }
        info!(table, "Cleaner stopped");
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .as_ref()
            .is_some_and(|sweep| !sweep.handle.is_finished())
    }

    pub fn interval(&self) -> Option<Duration> {
        self.running.lock().as_ref().map(|sweep| sweep.interval)
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        if let Some(sweep) = self.running.get_mut().take() {
            sweep.token.cancel();
        }
    }
}
