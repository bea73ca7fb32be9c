use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which market data source gets wired behind the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Poll the real CoinGecko endpoint.
    Live,
    /// Deterministic in-process data, for offline development.
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid CRIPTOFLASH_MODE: {}. Must be 'live' or 'mock'", s),
        }
    }
}

/// Runtime configuration. Every default is the product's fixed constant, so
/// an empty environment runs the dashboard exactly as shipped; the variables
/// exist for development (pointing at a stub server, slowing the poll).
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub api_base_url: String,
    pub vs_currency: String,
    pub per_page: u32,
    pub locale: String,
    pub refresh_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("CRIPTOFLASH_MODE").unwrap_or_else(|_| "live".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let api_base_url = env::var("CRIPTOFLASH_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.coingecko.com/api/v3".to_string());

        let vs_currency =
            env::var("CRIPTOFLASH_VS_CURRENCY").unwrap_or_else(|_| "eur".to_string());

        let per_page = env::var("CRIPTOFLASH_PER_PAGE")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u32>()
            .context("Failed to parse CRIPTOFLASH_PER_PAGE")?;

        let locale = env::var("CRIPTOFLASH_LOCALE").unwrap_or_else(|_| "es".to_string());

        let refresh_interval_ms = env::var("CRIPTOFLASH_REFRESH_INTERVAL_MS")
            .unwrap_or_else(|_| "15000".to_string())
            .parse::<u64>()
            .context("Failed to parse CRIPTOFLASH_REFRESH_INTERVAL_MS")?;
        if refresh_interval_ms == 0 {
            // The poll ticker cannot run with a zero period
            anyhow::bail!("Invalid CRIPTOFLASH_REFRESH_INTERVAL_MS: 0. Must be greater than zero");
        }

        Ok(Config {
            mode,
            api_base_url,
            vs_currency,
            per_page,
            locale,
            refresh_interval_ms,
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}
