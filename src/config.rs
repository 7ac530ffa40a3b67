//! Configuration loading from TOML.
//!
//! Reads a `parlay.toml` style file and deserializes it into
//! strongly-typed structs. Every field has a default, so an empty file
//! (or `AppConfig::default()`) gives a working 3-leg builder.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;

use crate::types::ParlayError;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ticket: TicketConfig,
    pub logging: LoggingConfig,
}

/// Ticket builder settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TicketConfig {
    /// Maximum legs per ticket.
    pub max_legs: usize,
    /// Stake used by `snapshot()` for the expected payout.
    pub default_stake: Decimal,
    /// Whether optimize passes try one swap toward a second sport.
    pub diversity_preferred: bool,
    /// Warn when a leg's display odds imply a probability further than
    /// this from its stated win probability.
    pub odds_drift_tolerance: f64,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            max_legs: 3,
            default_stake: dec!(100),
            diversity_preferred: true,
            odds_drift_tolerance: 0.15,
        }
    }
}

impl TicketConfig {
    /// Reject settings the ticket controller cannot honour.
    pub fn validate(&self) -> Result<(), ParlayError> {
        if self.max_legs == 0 {
            return Err(ParlayError::Config("max_legs must be at least 1".to_string()));
        }
        if self.default_stake <= Decimal::ZERO {
            return Err(ParlayError::Config(format!(
                "default_stake must be positive, got {}",
                self.default_stake
            )));
        }
        if !(0.0..=1.0).contains(&self.odds_drift_tolerance) {
            return Err(ParlayError::Config(format!(
                "odds_drift_tolerance must be within [0, 1], got {}",
                self.odds_drift_tolerance
            )));
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "parlay=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config file: {path}"))
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).context("Failed to parse TOML configuration")?;
        config.ticket.validate()?;
        Ok(config)
    }
}
