//! # Salarypool Node Runtime
//!
//! The main entry point for the salarypool service.
//!
//! ## Startup Sequence
//!
//! 1. Initialize tracing (filter from `RUST_LOG`, default `info`)
//! 2. Load configuration from the environment
//! 3. Connect the Postgres pool and ensure the schema exists
//! 4. Construct the stores and the gateway
//! 5. Serve HTTP until ctrl-c

mod config;

use anyhow::{Context, Result};
use config::NodeConfig;
use pool_gateway::GatewayService;
use pool_store::{EntryStore, PgStores, PoolStore};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = NodeConfig::from_env()?;

    let options = PgConnectOptions::new()
        .host(&config.db.host)
        .username(&config.db.user)
        .password(&config.db.password)
        .database(&config.db.dbname)
        .ssl_mode(PgSslMode::Disable);
    let pool = PgPoolOptions::new()
        .max_connections(config.db.max_connections)
        .acquire_timeout(config.gateway.timeouts.store_op)
        .connect_with(options)
        .await
        .context("failed to open database")?;

    let stores = PgStores::new(pool, config.gateway.timeouts.store_op);
    stores
        .ensure_schema()
        .await
        .context("failed to ensure schema")?;
    info!(db = %config.db.dbname, "database ready");

    let stores = Arc::new(stores);
    let service = GatewayService::with_default_renderer(
        config.gateway,
        Arc::clone(&stores) as Arc<dyn PoolStore>,
        stores as Arc<dyn EntryStore>,
    )?;

    service
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
