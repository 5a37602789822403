//! Configuration types for stock-fetcher

use crate::telemetry::LogFormat;
use anyhow::Context;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Values filled in when a command leaves a field out
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Source recorded on observations built without --source
    #[serde(default = "default_source")]
    pub source: String,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_source() -> String {
    "manual".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Built-in configuration shipped as `config.toml.example`
    pub fn example() -> anyhow::Result<Self> {
        let config = toml::from_str(include_str!("../config.toml.example"))?;
        Ok(config)
    }
}
