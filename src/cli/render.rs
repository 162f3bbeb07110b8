//! Render command implementation

use crate::config::Config;
use crate::landing::{render, Frame, LandingPage};
use crate::refresh::PriceReading;
use chrono::Local;
use clap::Args;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Frame index for the decorative motion
    #[arg(long, default_value = "0")]
    pub frame: u64,
}

impl RenderArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let page = LandingPage::from_config(&config.landing);
        let frame = Frame {
            index: self.frame,
            clock: Local::now().time(),
        };
        print!("{}", render(&page, &PriceReading::Unloaded, &frame));
        Ok(())
    }
}
