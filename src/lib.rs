//! stock-fetcher: stock price observation record
//!
//! This library provides:
//! - The `PriceObservation` value type (symbol, exact-decimal price, UTC
//!   timestamp, source)
//! - Its JSON and newline-delimited JSON wire form
//! - Configuration, logging and CLI plumbing for the inspection binary

pub mod cli;
pub mod config;
pub mod observation;
pub mod telemetry;

pub use observation::PriceObservation;
