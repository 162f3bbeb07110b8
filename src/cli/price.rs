//! Price command implementation

use crate::config::Config;
use crate::landing::format_price;
use crate::quote::PriceSource;
use clap::Args;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Print the raw decimal instead of the grouped form
    #[arg(long)]
    pub raw: bool,
}

impl PriceArgs {
    /// Single fetch outside the refresh controller; failures surface
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = super::quote_client(&config.quote)?;
        let quote = client.fetch_price().await?;

        if self.raw {
            println!("{}", quote.price);
        } else {
            println!(
                "{} {}: ${} (as of {})",
                quote.asset,
                quote.currency,
                format_price(quote.price),
                quote.fetched_at.to_rfc3339()
            );
        }
        Ok(())
    }
}
