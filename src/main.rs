use clap::Parser;
use landing_ticker::cli::{show_config, Cli, Commands};
use landing_ticker::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    landing_ticker::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting live landing page");
            args.execute(&config).await?;
        }
        Commands::Price(args) => {
            args.execute(&config).await?;
        }
        Commands::Render(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            print!("{}", show_config(&config)?);
        }
    }

    Ok(())
}
