//! Market settings defaults from config.toml
//!
//! The `[market]` table seeds the settings row the first time the database is
//! created. After that, administrators change settings through the bot and the
//! file is no longer consulted.

use crate::{
    errors::{Error, Result},
    models::MarketSettings,
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Initial market settings; built-in defaults apply when absent
    #[serde(default)]
    pub market: Option<MarketConfig>,
}

/// The `[market]` table. Every key is optional and falls back to the built-in default.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct MarketConfig {
    /// Fixed hevea tariff per kg
    pub pay_rate_hevea: Option<i64>,
    /// Legacy cacao tariff
    pub pay_rate_cacao: Option<i64>,
    /// Hevea market price per kg
    pub market_price_hevea: Option<i64>,
    /// Cacao market price per kg
    pub market_price_cacao: Option<i64>,
    /// Share of the cacao market price paid to workers
    pub cacao_pay_ratio: Option<f64>,
}

impl Config {
    /// Market settings to seed, with built-in defaults for missing keys.
    ///
    /// # Errors
    /// Returns an error when the configured values are out of range.
    pub fn initial_market_settings(&self) -> Result<MarketSettings> {
        let defaults = MarketSettings::default();
        let market = self.market.unwrap_or_default();

        let settings = MarketSettings {
            pay_rate_hevea: market.pay_rate_hevea.unwrap_or(defaults.pay_rate_hevea),
            pay_rate_cacao: market.pay_rate_cacao.unwrap_or(defaults.pay_rate_cacao),
            market_price_hevea: market
                .market_price_hevea
                .unwrap_or(defaults.market_price_hevea),
            market_price_cacao: market
                .market_price_cacao
                .unwrap_or(defaults.market_price_cacao),
            cacao_pay_ratio: market.cacao_pay_ratio.unwrap_or(defaults.cacao_pay_ratio),
        };

        settings.validate().map_err(|e| Error::Config {
            message: format!("Invalid [market] settings in config.toml: {e}"),
        })?;
        Ok(settings)
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Loads configuration from `AGRIPAY_CONFIG` or `./config.toml`.
///
/// A missing file is not an error: the built-in defaults are used instead.
///
/// # Errors
/// Returns an error if the file exists but cannot be parsed.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("AGRIPAY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        info!("No configuration file at {path}, using built-in market defaults");
        return Ok(Config::default());
    }
    load_config(path)
}
