//! Price observation types

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single price observed for an instrument at an instant
///
/// No field is validated: empty symbols, negative prices and epoch
/// timestamps are all representable. `Default` yields the empty instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceObservation {
    /// Ticker or instrument identifier (e.g., "AAPL")
    pub symbol: String,
    /// Observed price, kept as an exact decimal
    #[serde(with = "price_text")]
    pub price: Decimal,
    /// When the price was observed
    pub timestamp: DateTime<Utc>,
    /// Data provider or feed that produced the observation
    pub source: String,
}

impl PriceObservation {
    /// Create an observation with every field set
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        timestamp: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            timestamp,
            source: source.into(),
        }
    }
}

impl fmt::Display for PriceObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceObservation(symbol={}, price={}, timestamp={}, source={})",
            self.symbol,
            self.price,
            self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.source
        )
    }
}

/// Price as exact decimal text
///
/// JSON numbers are refused, and so is any text `Decimal` cannot hold
/// without rounding (more than 28 fractional digits or out of range).
mod price_text {
    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(price)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let text = String::deserialize(deserializer)?;
        Decimal::from_str_exact(&text)
            .map_err(|e| de::Error::custom(format!("invalid price {:?}: {}", text, e)))
    }
}
