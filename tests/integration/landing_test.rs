//! Integration tests for landing page rendering

use chrono::{NaiveTime, Utc};
use landing_ticker::config::LandingConfig;
use landing_ticker::landing::{render, Frame, LandingPage};
use landing_ticker::refresh::PriceReading;
use rust_decimal_macros::dec;

fn frame() -> Frame {
    Frame {
        index: 0,
        clock: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
    }
}

#[test]
fn test_custom_brand_page() {
    let config = LandingConfig {
        brand: "example.test".to_string(),
        cta_url: "https://trade.example.test/".to_string(),
    };
    let page = LandingPage::from_config(&config);
    let reading = PriceReading::Loaded {
        price: dec!(1234567.891),
        as_of: Utc::now(),
    };

    let text = render(&page, &reading, &frame());
    assert!(text.contains("example.test"));
    assert!(text.contains("09:05:00"));
    assert!(text.contains("$1,234,567.891"));
    assert!(text.contains("https://trade.example.test/"));
}

#[test]
fn test_render_is_deterministic() {
    let page = LandingPage::default();
    let a = render(&page, &PriceReading::Unloaded, &frame());
    let b = render(&page, &PriceReading::Unloaded, &frame());
    assert_eq!(a, b);
}
