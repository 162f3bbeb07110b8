//! Landing page presentation
//!
//! Static marketing copy plus the live price card, rendered as plain text
//! for a terminal.

mod format;
mod render;

pub use format::{format_price, price_label, LOADING_PLACEHOLDER};
pub use render::{render, Frame, PAGE_WIDTH};

use crate::config::LandingConfig;

/// Ticker line scrolled under the header
pub const DEFAULT_TICKER: &str = "🚀 Next-Generation Crypto Trading Platform • 🔒 Secure & Decentralized • 💸 Lowest Fees in the Market";

/// Label of the live price card
pub const PRICE_CARD_TITLE: &str = "BTC Price";

/// A statistic card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatCard {
    /// Filled from the refresh controller
    LivePrice { title: String },
    /// Hard-coded copy
    Fixed { title: String, value: String },
}

impl StatCard {
    pub fn title(&self) -> &str {
        match self {
            StatCard::LivePrice { title } | StatCard::Fixed { title, .. } => title,
        }
    }
}

/// A feature tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub caption: String,
}

/// Outbound link to the trading site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
    /// Opened in a new browsing context
    pub new_context: bool,
    /// Link relationship; `noopener` keeps the opened page away from the opener
    pub rel: &'static str,
}

/// Everything on the page except the live values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub brand: String,
    pub ticker: String,
    pub stats: Vec<StatCard>,
    pub features: Vec<Feature>,
    pub cta: CallToAction,
}

impl LandingPage {
    pub fn from_config(config: &LandingConfig) -> Self {
        let caption = format!("Powered by {}'s proprietary technology", config.brand);
        let features = ["Instant Exchange", "Cold Storage", "Margin Trading"]
            .into_iter()
            .map(|title| Feature {
                title: title.to_string(),
                caption: caption.clone(),
            })
            .collect();

        Self {
            brand: config.brand.clone(),
            ticker: DEFAULT_TICKER.to_string(),
            stats: vec![
                StatCard::LivePrice {
                    title: PRICE_CARD_TITLE.to_string(),
                },
                StatCard::Fixed {
                    title: "24h Volume".to_string(),
                    value: "$42B+".to_string(),
                },
                StatCard::Fixed {
                    title: "Market Cap".to_string(),
                    value: "$800B+".to_string(),
                },
            ],
            features,
            cta: CallToAction {
                label: "Launch Trading Platform".to_string(),
                url: config.cta_url.clone(),
                new_context: true,
                rel: "noopener noreferrer",
            },
        }
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::from_config(&LandingConfig::default())
    }
}
