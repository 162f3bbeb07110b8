//! Prometheus metrics

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::time::Duration;

const FETCH_TOTAL: &str = "landing_ticker_price_fetch_total";
const FETCH_LATENCY: &str = "landing_ticker_price_fetch_latency_ms";
const LAST_PRICE: &str = "landing_ticker_last_price";

/// Outcome of a single price fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Success,
    Failure,
}

impl FetchOutcome {
    fn label(self) -> &'static str {
        match self {
            FetchOutcome::Success => "success",
            FetchOutcome::Failure => "failure",
        }
    }
}

/// Record one fetch attempt and its latency
pub fn record_fetch(outcome: FetchOutcome, duration: Duration) {
    let outcome = outcome.label();
    metrics::counter!(FETCH_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(FETCH_LATENCY, "outcome" => outcome).record(duration.as_secs_f64() * 1000.0);
}

/// Publish the most recently applied price
pub fn set_price(price: Decimal) {
    match price.to_f64() {
        Some(value) => metrics::gauge!(LAST_PRICE).set(value),
        None => tracing::debug!(%price, "Price not representable as f64"),
    }
}

/// Install the Prometheus recorder with an HTTP scrape listener
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}
