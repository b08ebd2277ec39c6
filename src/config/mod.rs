//! Configuration module for the scanner.
//!
//! Loads the two displacement tunables from environment variables with the
//! documented defaults. The structural windows (3-bar swings, 2-bar fair
//! value gap lookback) are fixed properties of the patterns and are not
//! configurable.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Error type for scanner configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid lookback: {value}. Must be >= 1")]
    InvalidLookback { value: usize },

    #[error("Invalid body multiplier: {value}. Must be > 0")]
    InvalidMultiplier { value: Decimal },
}

/// Scanner environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerEnvConfig {
    pub displacement_lookback: usize,
    pub body_multiplier: Decimal,
}

impl Default for ScannerEnvConfig {
    fn default() -> Self {
        Self {
            displacement_lookback: 5,
            body_multiplier: dec!(1.5),
        }
    }
}

impl ScannerEnvConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let displacement_lookback = env::var("DISPLACEMENT_LOOKBACK")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .context("Failed to parse DISPLACEMENT_LOOKBACK - must be a positive integer")?;

        let body_multiplier = Decimal::from_str(
            &env::var("BODY_MULTIPLIER").unwrap_or_else(|_| "1.5".to_string()),
        )
        .context("Failed to parse BODY_MULTIPLIER - must be a decimal number")?;

        let config = Self {
            displacement_lookback,
            body_multiplier,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.displacement_lookback == 0 {
            return Err(ConfigError::InvalidLookback {
                value: self.displacement_lookback,
            });
        }
        if self.body_multiplier <= Decimal::ZERO {
            return Err(ConfigError::InvalidMultiplier {
                value: self.body_multiplier,
            });
        }
        Ok(())
    }
}
