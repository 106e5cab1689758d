//! Gateway service: wires the domain pieces together and serves HTTP.

use crate::adapters::BasicHtmlRenderer;
use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::domain::gate::AccessGate;
use crate::domain::submission::SubmissionWorkflow;
use crate::metrics::GatewayMetrics;
use crate::ports::render::ViewRenderer;
use crate::router::{build_router, AppState};
use axum::Router;
use pool_store::{EntryStore, PoolStore};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// The salary pool gateway.
///
/// All dependencies are injected at construction and immutable afterwards;
/// there is no other shared state.
pub struct GatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl GatewayService {
    /// Create a gateway over the given stores and renderer.
    pub fn new(
        config: GatewayConfig,
        pools: Arc<dyn PoolStore>,
        entries: Arc<dyn EntryStore>,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|err| GatewayError::Config(err.to_string()))?;

        let gate = Arc::new(AccessGate::new(Arc::clone(&pools), Arc::clone(&entries)));
        let workflow = Arc::new(SubmissionWorkflow::new(
            Arc::clone(&pools),
            Arc::clone(&entries),
        ));
        let metrics = Arc::new(GatewayMetrics::new());
        let cookie_ttl = config.cookie.ttl;

        Ok(Self {
            config,
            state: AppState {
                pools,
                gate,
                workflow,
                renderer,
                metrics,
                cookie_ttl,
            },
        })
    }

    /// Same as [`GatewayService::new`] with the default HTML renderer.
    pub fn with_default_renderer(
        config: GatewayConfig,
        pools: Arc<dyn PoolStore>,
        entries: Arc<dyn EntryStore>,
    ) -> Result<Self, GatewayError> {
        Self::new(config, pools, entries, Arc::new(BasicHtmlRenderer::new()))
    }

    /// The router over this service's state, for in-process tests.
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Gateway counters.
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.state.metrics)
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let router = self.router();

        info!(addr = %addr, "starting HTTP server");
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("HTTP server stopped");
        Ok(())
    }
}
