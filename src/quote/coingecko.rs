//! CoinGecko simple-price client
//!
//! Queries `/simple/price?ids=<asset>&vs_currencies=<currency>` and reads
//! the nested `{"<asset>": {"<currency>": <number>}}` field.

use super::{PriceQuote, PriceSource, RefreshError};
use crate::config::QuoteConfig;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

/// CoinGecko public API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Configuration for the CoinGecko client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Asset identifier queried via `ids`
    pub asset: String,
    /// Currency queried via `vs_currencies`
    pub currency: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_URL.to_string(),
            asset: "bitcoin".to_string(),
            currency: "usd".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&QuoteConfig> for CoinGeckoConfig {
    fn from(config: &QuoteConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            asset: config.asset.to_lowercase(),
            currency: config.currency.to_lowercase(),
            timeout: config.timeout(),
        }
    }
}

/// Client for CoinGecko's simple-price endpoint
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    client: Client,
}

impl CoinGeckoClient {
    /// Create a client with default configuration (bitcoin / usd)
    pub fn new() -> Result<Self, RefreshError> {
        Self::with_config(CoinGeckoConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, RefreshError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Get the active configuration
    pub fn config(&self) -> &CoinGeckoConfig {
        &self.config
    }

    fn price_url(&self) -> String {
        format!("{}/simple/price", self.config.base_url)
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn fetch_price(&self) -> Result<PriceQuote, RefreshError> {
        let url = self.price_url();

        tracing::debug!(
            url = %url,
            asset = %self.config.asset,
            currency = %self.config.currency,
            "Fetching price"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ids", self.config.asset.as_str()),
                ("vs_currencies", self.config.currency.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RefreshError::Status { status, body });
        }

        let body = response.text().await?;
        let price = parse_price(&body, &self.config.asset, &self.config.currency)?;

        Ok(PriceQuote {
            asset: self.config.asset.clone(),
            currency: self.config.currency.clone(),
            price,
            fetched_at: Utc::now(),
        })
    }
}

/// Parse the quoted price out of a simple-price response body
///
/// Format: `{"bitcoin": {"usd": 65000}}`
fn parse_price(body: &str, asset: &str, currency: &str) -> Result<Decimal, RefreshError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| RefreshError::Malformed(format!("invalid JSON: {}", e)))?;

    let field = value
        .get(asset)
        .and_then(|a| a.get(currency))
        .ok_or_else(|| RefreshError::Malformed(format!("missing field {}.{}", asset, currency)))?;

    let serde_json::Value::Number(number) = field else {
        return Err(RefreshError::Malformed(format!(
            "{}.{} is not a number: {}",
            asset, currency, field
        )));
    };

    // Large or tiny prices come back in exponent notation
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| RefreshError::Malformed(format!("unrepresentable price {}: {}", text, e)))
}
