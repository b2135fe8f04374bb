//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Immutable once constructed; read once at startup and held for the
/// lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Wallet private key used to authenticate with the CLOB (hex).
    pub polymarket_private_key: String,

    /// CLOB market identifier (token id) all commands operate on.
    pub polymarket_market_id: String,

    /// CLOB API base URL.
    #[serde(default = "default_api_host")]
    pub polymarket_api_host: String,

    /// Chain ID (137 for Polygon mainnet).
    #[serde(default = "default_chain_id")]
    pub polymarket_chain_id: u64,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,
}

fn default_api_host() -> String {
    "https://clob.polymarket.com".to_string()
}

fn default_chain_id() -> u64 {
    137 // Polygon mainnet
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.polymarket_private_key.trim().is_empty() {
            return Err("POLYMARKET_PRIVATE_KEY is required".to_string());
        }

        if self.polymarket_market_id.trim().is_empty() {
            return Err("POLYMARKET_MARKET_ID is required".to_string());
        }

        Ok(())
    }
}
