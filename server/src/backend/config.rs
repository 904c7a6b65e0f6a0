//! Server configuration read from the environment.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "EVENT_SCHEDULE_ADDR";
pub const CORS_ORIGIN_VAR: &str = "EVENT_SCHEDULE_CORS_ORIGIN";
pub const CATALOG_VAR: &str = "EVENT_SCHEDULE_CATALOG";
pub const DETAILS_DIR_VAR: &str = "EVENT_SCHEDULE_DETAILS_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Origin of the web frontend allowed through CORS
    pub allowed_origin: String,
    /// YAML event catalog; the built-in table is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Directory of `<detail_id>.md` event descriptions
    pub details_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            allowed_origin: "http://localhost:8080".to_string(),
            catalog_path: None,
            details_dir: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    /// Unset or blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get(ADDR_VAR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", ADDR_VAR, addr))?;
        }
        if let Some(origin) = get(CORS_ORIGIN_VAR) {
            config.allowed_origin = origin.trim().to_string();
        }
        config.catalog_path = get(CATALOG_VAR).map(PathBuf::from);
        config.details_dir = get(DETAILS_DIR_VAR).map(PathBuf::from);

        Ok(config)
    }
}
