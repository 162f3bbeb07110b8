//! Run command implementation

use crate::config::Config;
use crate::landing::{render, Frame, LandingPage};
use crate::refresh::{PriceReader, PriceRefresher};
use chrono::Local;
use clap::Args;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Clear screen and move the cursor home
const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Stop after this many redraws (runs until Ctrl-C otherwise)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Redraw period in milliseconds
    #[arg(long, default_value = "1000")]
    pub redraw_ms: u64,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = super::quote_client(&config.quote)?;
        let refresher = PriceRefresher::with_interval(Arc::new(client), config.refresh.interval());
        let page = LandingPage::from_config(&config.landing);

        let handle = refresher.start();
        let result = self.redraw_loop(&page, refresher.reader()).await;
        handle.stop();

        result
    }

    async fn redraw_loop(&self, page: &LandingPage, reader: PriceReader) -> anyhow::Result<()> {
        let mut redraw = tokio::time::interval(Duration::from_millis(self.redraw_ms.max(16)));
        redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut index = 0u64;
        loop {
            if self.frames.is_some_and(|limit| index >= limit) {
                break;
            }

            tokio::select! {
                _ = redraw.tick() => {}
                _ = &mut ctrl_c => {
                    tracing::info!("Interrupted, shutting down");
                    break;
                }
            }

            let frame = Frame {
                index,
                clock: Local::now().time(),
            };
            let text = render(page, &reader.current_value(), &frame);

            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}{}", CLEAR, text)?;
            stdout.flush()?;

            index += 1;
        }

        Ok(())
    }
}
