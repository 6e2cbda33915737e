//! Server configuration: the listen address plus the backend settings.

use std::net::SocketAddr;

use anyhow::Context;
use backend::config::BackendConfig;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub backend: BackendConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr = lookup("MET_LISTEN_ADDR").unwrap_or(DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid value for MET_LISTEN_ADDR: {listen_addr:?}"))?;
        let backend = BackendConfig::from_lookup(lookup)?;
        Ok(Self { listen_addr, backend })
    }
}
