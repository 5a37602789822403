use clap::Parser;
use std::io::Write;
use stock_fetcher::cli::{show_config, Cli, Commands};
use stock_fetcher::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {:#}", cli.config, e);
        eprintln!("Using default configuration");
        Config::example()
    })?;

    // Initialize telemetry
    stock_fetcher::telemetry::init_telemetry(&config.telemetry)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Encode(args) => args.execute(&config, &mut out)?,
        Commands::Decode(args) => args.execute(&mut out)?,
        Commands::Config => show_config(&config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
