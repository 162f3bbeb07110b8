//! CLI interface for landing-ticker
//!
//! Provides subcommands for:
//! - `run`: Live landing page with the refreshing BTC price
//! - `price`: Fetch and print the price once
//! - `render`: Print the page once without touching the network
//! - `config`: Show the effective configuration

mod price;
mod render;
mod run;

pub use price::PriceArgs;
pub use render::RenderArgs;
pub use run::RunArgs;

use crate::config::{Config, QuoteConfig};
use crate::quote::{CoinGeckoClient, CoinGeckoConfig};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "landing-ticker")]
#[command(about = "Terminal landing page with a live BTC price ticker")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the live landing page
    Run(RunArgs),
    /// Fetch the current price once
    Price(PriceArgs),
    /// Print the landing page once, price unloaded
    Render(RenderArgs),
    /// Show the effective configuration
    Config,
}

/// Build the quotation client described by the config
fn quote_client(config: &QuoteConfig) -> anyhow::Result<CoinGeckoClient> {
    Ok(CoinGeckoClient::with_config(CoinGeckoConfig::from(config))?)
}

/// Effective configuration as TOML
pub fn show_config(config: &Config) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
