//! Integration tests for the refresh controller over HTTP

use crate::common::{closed_addr, StubServer};
use landing_ticker::quote::{CoinGeckoClient, CoinGeckoConfig};
use landing_ticker::refresh::{PriceReading, PriceRefresher};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

const PERIOD: Duration = Duration::from_millis(200);

fn refresher(base_url: String) -> PriceRefresher {
    let client = CoinGeckoClient::with_config(CoinGeckoConfig {
        base_url,
        timeout: Duration::from_secs(2),
        ..Default::default()
    })
    .unwrap();
    PriceRefresher::with_interval(Arc::new(client), PERIOD)
}

#[tokio::test]
async fn test_recovers_after_failed_fetch() {
    let server = StubServer::start(vec![
        (500, "internal error"),
        (200, r#"{"bitcoin":{"usd":64000}}"#),
    ])
    .await;
    let refresher = refresher(server.base_url());
    let handle = refresher.start();

    timeout(Duration::from_secs(5), async {
        while !refresher.current_value().is_loaded() {
            sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("price never loaded");

    assert_eq!(refresher.current_value().price(), Some(dec!(64000)));
    assert!(server.requests().len() >= 2);

    handle.stop();
    let settled = server.requests().len();
    let snapshot = refresher.reader().snapshot();

    sleep(PERIOD * 3).await;
    // At most one fetch was already in flight when stop() ran
    assert!(server.requests().len() <= settled + 1);
    assert_eq!(refresher.reader().snapshot(), snapshot);
}

#[tokio::test]
async fn test_unreachable_source_stays_unloaded() {
    let addr = closed_addr().await;
    let refresher = refresher(format!("http://{}/api/v3", addr));
    let _handle = refresher.start();

    sleep(PERIOD * 2).await;
    assert_eq!(refresher.current_value(), PriceReading::Unloaded);
    assert!(refresher.is_running());
}
