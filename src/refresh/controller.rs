//! Periodic price refresh controller

use super::snapshot::{ApplyOutcome, PriceReading, PriceSnapshot, SnapshotStore};
use crate::quote::PriceSource;
use crate::telemetry::{self, FetchOutcome};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::task::AbortHandle;
use tokio::time::MissedTickBehavior;

/// Default refresh period
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug)]
enum Lifecycle {
    Idle,
    Running(AbortHandle),
    Stopped,
}

struct Shared {
    source: Arc<dyn PriceSource>,
    store: Arc<SnapshotStore>,
    interval: Duration,
    next_seq: AtomicU64,
    /// Live `RefreshHandle`s; the last one dropped stops the cycle
    handles: AtomicUsize,
    lifecycle: Mutex<Lifecycle>,
}

impl Shared {
    fn lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stop(&self) {
        let mut lifecycle = self.lifecycle();
        if let Lifecycle::Running(timer) = &*lifecycle {
            // Close before aborting so an in-flight fetch can't land after
            // stop() returns
            self.store.close();
            timer.abort();
            *lifecycle = Lifecycle::Stopped;
            tracing::info!("Price refresh stopped");
        }
    }

    /// Fire-and-forget refresh loop: one fetch task per tick
    async fn run_timer(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(self.interval);
        // Fixed rate, but a stalled runtime gets one tick on resume, not one
        // per missed period
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
            let shared = Arc::clone(&self);
            tokio::spawn(async move {
                shared.refresh_once(seq).await;
            });
        }
    }

    /// Fetch once and offer the result to the store. Never fails.
    async fn refresh_once(&self, seq: u64) {
        let started = Instant::now();

        match self.source.fetch_price().await {
            Ok(quote) => {
                telemetry::record_fetch(FetchOutcome::Success, started.elapsed());
                match self.store.apply(seq, &quote) {
                    ApplyOutcome::Applied => {
                        telemetry::set_price(quote.price);
                        tracing::debug!(seq, price = %quote.price, "Price updated");
                    }
                    ApplyOutcome::Stale { latest_seq } => {
                        tracing::debug!(seq, latest_seq, "Discarding stale price");
                    }
                    ApplyOutcome::Closed => {
                        tracing::debug!(seq, "Refresh stopped, discarding price");
                    }
                }
            }
            Err(e) => {
                telemetry::record_fetch(FetchOutcome::Failure, started.elapsed());
                tracing::warn!(seq, error = %e, "Error fetching price");
            }
        }
    }
}

/// Keeps a best-effort view of the quoted price, refreshed on a fixed-rate
/// timer
///
/// The first fetch is issued immediately on [`PriceRefresher::start`].
/// Failed fetches are logged and swallowed; they never change the current
/// value or interrupt the schedule.
pub struct PriceRefresher {
    shared: Arc<Shared>,
}

impl PriceRefresher {
    /// Create a refresher with the default 60 second period
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self::with_interval(source, DEFAULT_REFRESH_INTERVAL)
    }

    /// Create a refresher with a custom period
    pub fn with_interval(source: Arc<dyn PriceSource>, interval: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                store: Arc::new(SnapshotStore::new()),
                interval,
                next_seq: AtomicU64::new(0),
                handles: AtomicUsize::new(0),
                lifecycle: Mutex::new(Lifecycle::Idle),
            }),
        }
    }

    /// Begin the refresh cycle
    ///
    /// Must be called within a tokio runtime. Starting a running refresher
    /// returns another handle to the same cycle; a stopped refresher stays
    /// stopped.
    ///
    /// The cycle runs until [`RefreshHandle::stop`] or [`PriceRefresher::stop`]
    /// is called, or until every handle returned by `start` has been dropped.
    pub fn start(&self) -> RefreshHandle {
        let mut lifecycle = self.shared.lifecycle();
        match *lifecycle {
            Lifecycle::Idle => {
                tracing::info!(
                    interval_secs = self.shared.interval.as_secs(),
                    "Starting price refresh"
                );
                let timer = tokio::spawn(Arc::clone(&self.shared).run_timer());
                *lifecycle = Lifecycle::Running(timer.abort_handle());
            }
            Lifecycle::Running(_) => {
                tracing::debug!("Price refresh already running");
            }
            Lifecycle::Stopped => {
                tracing::warn!("Price refresh already stopped, not restarting");
            }
        }

        self.shared.handles.fetch_add(1, Ordering::AcqRel);
        RefreshHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Cancel all future fetches. Idempotent, and a no-op before start.
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Latest known price or [`PriceReading::Unloaded`]
    pub fn current_value(&self) -> PriceReading {
        self.shared.store.current()
    }

    /// Read-only view for the presentation layer
    pub fn reader(&self) -> PriceReader {
        PriceReader {
            store: Arc::clone(&self.shared.store),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.shared.lifecycle(), Lifecycle::Running(_))
    }
}

/// Guard for a running refresh cycle
///
/// Dropping the last handle of a cycle stops it; `stop()` stops it at once
/// regardless of other handles.
#[must_use = "dropping the last handle stops the refresh cycle"]
pub struct RefreshHandle {
    shared: Arc<Shared>,
}

impl RefreshHandle {
    /// Cancel all future fetches. Idempotent.
    pub fn stop(&self) {
        self.shared.stop();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if self.shared.handles.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.shared.stop();
        }
    }
}

/// Cheap, cloneable read access to the snapshot
#[derive(Debug, Clone)]
pub struct PriceReader {
    store: Arc<SnapshotStore>,
}

impl PriceReader {
    pub fn current_value(&self) -> PriceReading {
        self.store.current()
    }

    pub fn snapshot(&self) -> PriceSnapshot {
        self.store.snapshot()
    }
}
