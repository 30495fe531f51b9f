//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default lifetime of issued access tokens (one hour)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document store connection URL (PostgreSQL)
    pub database_url: String,

    /// Secret used to sign and verify access tokens
    pub access_token_secret: String,

    /// Lifetime of issued access tokens in seconds
    pub token_ttl_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?,

            access_token_secret: lookup("ACCESS_TOKEN_SECRET")
                .filter(|s| !s.is_empty())
                .ok_or_else(|| anyhow::anyhow!("ACCESS_TOKEN_SECRET is required"))?,

            token_ttl_secs: match lookup("TOKEN_TTL_SECS") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("TOKEN_TTL_SECS must be a number, got {raw}"))?,
                None => DEFAULT_TOKEN_TTL_SECS,
            },

            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "storefront=debug,tower_http=info".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        };

        Ok(config)
    }
}
