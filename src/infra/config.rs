//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_API_ADDR: &str = "0.0.0.0:9090";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// Listen address for the API server.
pub fn api_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("API_ADDR").unwrap_or_else(|_| DEFAULT_API_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("API_ADDR must be a socket address, got '{}'", raw))
}

/// Connection pool size.
pub fn db_max_connections() -> anyhow::Result<u32> {
    match std::env::var("DB_MAX_CONNECTIONS") {
        Ok(v) => v
            .parse::<u32>()
            .map(|n| n.max(1))
            .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got '{}'", v)),
        Err(_) => Ok(DEFAULT_DB_MAX_CONNECTIONS),
    }
}
