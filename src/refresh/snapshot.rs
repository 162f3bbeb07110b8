//! Snapshot store for the last known price

use crate::quote::PriceQuote;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The single cached value of the latest successfully fetched price
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSnapshot {
    /// Last known price, absent until the first successful fetch
    pub value: Option<Decimal>,
    /// Time of the last successful update
    pub as_of: Option<DateTime<Utc>>,
    /// Sequence number of the fetch that produced `value` (0 when unloaded)
    pub seq: u64,
}

impl PriceSnapshot {
    pub fn reading(&self) -> PriceReading {
        match (self.value, self.as_of) {
            (Some(price), Some(as_of)) => PriceReading::Loaded { price, as_of },
            _ => PriceReading::Unloaded,
        }
    }
}

/// What the presentation layer sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceReading {
    /// No fetch has succeeded yet
    Unloaded,
    /// Latest successfully fetched price
    Loaded {
        price: Decimal,
        as_of: DateTime<Utc>,
    },
}

impl PriceReading {
    pub fn price(&self) -> Option<Decimal> {
        match self {
            PriceReading::Loaded { price, .. } => Some(*price),
            PriceReading::Unloaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PriceReading::Loaded { .. })
    }
}

/// Result of offering a fetched quote to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The snapshot now holds the quote
    Applied,
    /// A newer fetch was already applied
    Stale { latest_seq: u64 },
    /// The store was closed; the quote is discarded
    Closed,
}

#[derive(Debug, Default)]
struct StoreState {
    snapshot: PriceSnapshot,
    closed: bool,
}

/// Owned state cell shared between the refresh controller (writer) and
/// any number of readers
#[derive(Debug, Default)]
pub struct SnapshotStore {
    state: Mutex<StoreState>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // The critical sections never panic midway, so a poisoned state is
        // still consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current reading (price or unloaded)
    pub fn current(&self) -> PriceReading {
        self.lock().snapshot.reading()
    }

    /// Copy of the full snapshot
    pub fn snapshot(&self) -> PriceSnapshot {
        self.lock().snapshot.clone()
    }

    /// Replace the snapshot with a quote from fetch `seq`
    ///
    /// Quotes from fetches older than the last applied one are dropped, as
    /// is everything offered after [`SnapshotStore::close`].
    pub fn apply(&self, seq: u64, quote: &PriceQuote) -> ApplyOutcome {
        let mut state = self.lock();

        if state.closed {
            return ApplyOutcome::Closed;
        }
        if seq <= state.snapshot.seq {
            return ApplyOutcome::Stale {
                latest_seq: state.snapshot.seq,
            };
        }

        state.snapshot = PriceSnapshot {
            value: Some(quote.price),
            as_of: Some(quote.fetched_at),
            seq,
        };
        ApplyOutcome::Applied
    }

    /// Stop accepting updates. Returns false if already closed.
    pub fn close(&self) -> bool {
        let mut state = self.lock();
        let was_open = !state.closed;
        state.closed = true;
        was_open
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}
