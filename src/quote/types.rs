//! Price quotation types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single successful price quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Asset identifier (e.g., "bitcoin")
    pub asset: String,
    /// Fiat currency (e.g., "usd")
    pub currency: String,
    /// Quoted price
    pub price: Decimal,
    /// Local timestamp when the quote was received
    pub fetched_at: DateTime<Utc>,
}

/// A failed price refresh
///
/// The variants exist for diagnostics only; callers treat every cause the
/// same way.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("price refresh failed: request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("price refresh failed: unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("price refresh failed: malformed payload: {0}")]
    Malformed(String),
}
