//! Price refresh module
//!
//! Owns the last known price and refreshes it from a [`PriceSource`] on a
//! fixed-rate timer for display purposes.
//!
//! [`PriceSource`]: crate::quote::PriceSource

mod controller;
mod snapshot;

pub use controller::{PriceReader, PriceRefresher, RefreshHandle, DEFAULT_REFRESH_INTERVAL};
pub use snapshot::{ApplyOutcome, PriceReading, PriceSnapshot, SnapshotStore};
