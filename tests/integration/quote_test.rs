//! Integration tests for the CoinGecko client

use crate::common::{closed_addr, StubServer};
use landing_ticker::quote::{CoinGeckoClient, CoinGeckoConfig, PriceSource, RefreshError};
use rust_decimal_macros::dec;
use std::time::Duration;

fn client(base_url: String) -> CoinGeckoClient {
    CoinGeckoClient::with_config(CoinGeckoConfig {
        base_url,
        timeout: Duration::from_secs(5),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_price() {
    let server = StubServer::start(vec![(200, r#"{"bitcoin":{"usd":65000}}"#)]).await;
    let quote = client(server.base_url()).fetch_price().await.unwrap();

    assert_eq!(quote.price, dec!(65000));
    assert_eq!(quote.asset, "bitcoin");
    assert_eq!(quote.currency, "usd");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].starts_with("GET /api/v3/simple/price?ids=bitcoin&vs_currencies=usd "),
        "unexpected request: {}",
        requests[0]
    );
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = StubServer::start(vec![(429, r#"{"status":{"error_code":429}}"#)]).await;
    let result = client(server.base_url()).fetch_price().await;

    match result {
        Err(RefreshError::Status { status, .. }) => assert_eq!(status.as_u16(), 429),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = StubServer::start(vec![(200, r#"{"bitcoin":{}}"#)]).await;
    let result = client(server.base_url()).fetch_price().await;
    assert!(matches!(result, Err(RefreshError::Malformed(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let addr = closed_addr().await;
    let result = client(format!("http://{}/api/v3", addr)).fetch_price().await;
    assert!(matches!(result, Err(RefreshError::Request(_))));
}
