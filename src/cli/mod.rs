//! CLI interface for stock-fetcher
//!
//! Provides subcommands for:
//! - `encode`: Build an observation and print its JSON
//! - `decode`: Print observations from a newline-delimited JSON file
//! - `config`: Show configuration

mod decode;
mod encode;

pub use decode::DecodeArgs;
pub use encode::EncodeArgs;

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "stock-fetcher")]
#[command(about = "Build, encode and inspect stock price observations")]
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
    /// Build an observation and print it as JSON
    Encode(EncodeArgs),
    /// Print observations read from newline-delimited JSON
    Decode(DecodeArgs),
    /// Show configuration
    Config,
}

/// Print the effective configuration
pub fn show_config<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Default source: {}", config.defaults.source)?;
    writeln!(
        out,
        "  Logging: {} ({:?})",
        config.telemetry.log_level, config.telemetry.log_format
    )?;
    Ok(())
}
