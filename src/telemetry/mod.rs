//! Telemetry module
//!
//! Logging and metrics

mod fetch_metrics;
mod logging;

pub use fetch_metrics::{init_metrics, record_fetch, set_price, FetchOutcome};
pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format.into())?;

    if let Some(port) = config.metrics_port {
        init_metrics(port)?;
    }

    Ok(())
}
