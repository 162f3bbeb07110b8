//! Price quotation module
//!
//! Fetches the current asset price in a fiat currency from a public
//! quotation API

mod coingecko;
mod types;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, COINGECKO_API_URL};
pub use types::{PriceQuote, RefreshError};

use async_trait::async_trait;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the latest quoted price
    async fn fetch_price(&self) -> Result<PriceQuote, RefreshError>;
}
