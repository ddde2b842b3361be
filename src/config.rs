use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use tracing::info;

use crate::tmdb::TMDB_BASE;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let tmdb_api_key = lookup("TMDB_API_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing required environment variable: TMDB_API_KEY"))?;
        let tmdb_base_url = lookup("TMDB_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| TMDB_BASE.to_string());
        let addr = lookup("MALIX_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listen_addr = addr
            .parse()
            .with_context(|| format!("Invalid MALIX_ADDR '{}'", addr))?;
        info!("All required environment variables are set");
        Ok(Self {
            tmdb_api_key,
            tmdb_base_url,
            listen_addr,
        })
    }
}
