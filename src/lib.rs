//! landing-ticker: terminal landing page for b1tcoinx.xyz
//!
//! This library provides the core components for:
//! - Price quotation from a public API (CoinGecko simple-price)
//! - A fixed-rate price refresh controller with an owned snapshot
//! - Plain-text rendering of the landing page
//! - CLI, configuration and telemetry

pub mod cli;
pub mod config;
pub mod landing;
pub mod quote;
pub mod refresh;
pub mod telemetry;
