//! Encode command implementation

use crate::config::Config;
use crate::observation::{to_json, to_json_pretty, PriceObservation};
use chrono::{DateTime, Utc};
use clap::Args;
use rust_decimal::Decimal;
use std::io::Write;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Ticker or instrument identifier
    #[arg(long)]
    pub symbol: String,

    /// Observed price (exact decimal)
    #[arg(long, allow_hyphen_values = true)]
    pub price: Decimal,

    /// Observation time (RFC 3339); defaults to now
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Data provider; defaults to the configured source
    #[arg(long)]
    pub source: Option<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl EncodeArgs {
    /// Build the observation these arguments describe
    pub fn observation(&self, config: &Config) -> PriceObservation {
        PriceObservation::new(
            self.symbol.clone(),
            self.price,
            self.timestamp.unwrap_or_else(Utc::now),
            self.source
                .clone()
                .unwrap_or_else(|| config.defaults.source.clone()),
        )
    }

    pub fn execute<W: Write>(&self, config: &Config, out: &mut W) -> anyhow::Result<()> {
        let obs = self.observation(config);
        tracing::info!(
            symbol = %obs.symbol,
            price = %obs.price,
            source = %obs.source,
            "Encoding observation"
        );

        let json = if self.pretty {
            to_json_pretty(&obs)?
        } else {
            to_json(&obs)?
        };
        writeln!(out, "{}", json)?;
        Ok(())
    }
}
