//! Integration tests for configuration loading

use landing_ticker::config::{Config, LogFormatConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_config_example_loads() {
    let toml = r#"
        [quote]
        base_url = "https://api.coingecko.com/api/v3"
        asset = "bitcoin"
        currency = "usd"
        timeout_secs = 10

        [refresh]
        interval_secs = 60

        [landing]
        brand = "b1tcoinx.xyz"
        cta_url = "https://www.b1tcoin.ai/"

        [telemetry]
        log_level = "info"
        log_format = "pretty"
    "#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml.as_bytes()).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.refresh.interval(), Duration::from_secs(60));
    assert_eq!(config.quote.currency, "usd");
    assert_eq!(config.telemetry.log_format, LogFormatConfig::Pretty);
}

#[test]
fn test_config_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[refresh\ninterval_secs = ").unwrap();

    assert!(Config::load(file.path()).is_err());
}
