//! Node configuration from the environment.
//!
//! Database settings come from `SUSER`, `SPASS`, and `SDB`, with an
//! optional `SHOST`. `BIND` overrides the gateway listen address.

use anyhow::{Context, Result};
use pool_gateway::GatewayConfig;
use std::env;
use std::net::SocketAddr;

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub host: String,
    pub max_connections: u32,
}

/// Full node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub db: DbConfig,
    pub gateway: GatewayConfig,
}

impl NodeConfig {
    /// Read configuration from the environment at process start.
    pub fn from_env() -> Result<Self> {
        let db = DbConfig {
            user: require("SUSER")?,
            password: require("SPASS")?,
            dbname: require("SDB")?,
            host: env::var("SHOST").unwrap_or_else(|_| "localhost".to_string()),
            max_connections: 5,
        };

        let mut gateway = GatewayConfig::default();
        if let Ok(bind) = env::var("BIND") {
            let addr: SocketAddr = bind
                .parse()
                .with_context(|| format!("BIND is not a host:port address: {bind}"))?;
            gateway.http.host = addr.ip();
            gateway.http.port = addr.port();
        }

        Ok(Self { db, gateway })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}
