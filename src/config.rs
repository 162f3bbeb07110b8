//! Configuration types for landing-ticker

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub quote: QuoteConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub landing: LandingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price quotation endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuoteConfig {
    /// Base URL of the quotation API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Asset identifier (e.g., "bitcoin")
    #[serde(default = "default_asset")]
    pub asset: String,

    /// Target fiat currency (e.g., "usd")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}
fn default_asset() -> String {
    "bitcoin".to_string()
}
fn default_currency() -> String {
    "usd".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            asset: default_asset(),
            currency: default_currency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl QuoteConfig {
    pub fn timeout(&self) -> Duration {
        // A zero timeout fails every request
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Refresh timer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Period between fetches (seconds)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    60
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        // tokio's interval panics on a zero period
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Landing page copy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LandingConfig {
    /// Brand shown in the page header
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Outbound call-to-action link
    #[serde(default = "default_cta_url")]
    pub cta_url: String,
}

fn default_brand() -> String {
    "b1tcoinx.xyz".to_string()
}
fn default_cta_url() -> String {
    "https://www.b1tcoin.ai/".to_string()
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            cta_url: default_cta_url(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormatConfig,

    /// Prometheus scrape port; no exporter is started when unset
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormatConfig::default(),
            metrics_port: None,
        }
    }
}

/// Log output format as written in the config file
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
