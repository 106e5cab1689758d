//! HTTP routes and handlers.
//!
//! Three routes, mirroring the boundary surface: create a pool, view a
//! pool through the access gate, submit a salary entry.

use crate::cookies;
use crate::domain::config::GatewayConfig;
use crate::domain::error::ApiError;
use crate::domain::gate::{AccessGate, GateDecision};
use crate::domain::submission::{SubmissionForm, SubmissionWorkflow};
use crate::metrics::GatewayMetrics;
use crate::middleware::{TimeoutLayer, TracingLayer};
use crate::ports::render::ViewRenderer;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use pool_store::PoolStore;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pools: Arc<dyn PoolStore>,
    pub gate: Arc<AccessGate>,
    pub workflow: Arc<SubmissionWorkflow>,
    pub renderer: Arc<dyn ViewRenderer>,
    pub metrics: Arc<GatewayMetrics>,
    pub cookie_ttl: Duration,
}

/// Build the gateway router with its middleware stack.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pool", get(view_pool).post(create_pool))
        .route("/pool/salary", post(submit_salary))
        .layer(DefaultBodyLimit::max(config.limits.max_request_size))
        .layer(TimeoutLayer::new(config.timeouts.request))
        .layer(TracingLayer::new(Arc::clone(&state.metrics)))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.renderer.index_page())
}

#[derive(Debug, Deserialize)]
struct CreatePoolForm {
    #[serde(default, rename = "poolName")]
    pool_name: String,
    #[serde(default, rename = "minSize")]
    min_size: String,
}

async fn create_pool(
    State(state): State<AppState>,
    Form(form): Form<CreatePoolForm>,
) -> Result<Response, ApiError> {
    let min_size: i16 = form
        .min_size
        .parse()
        .map_err(|_| ApiError::validation())?;

    let pool = state.pools.create_pool(&form.pool_name, min_size).await?;
    state.metrics.record_pool_created();
    info!(pool = pool.id.0, min_size, "pool created");

    Ok(Redirect::to(&format!("/pool?id={}", pool.public_token)).into_response())
}

#[derive(Debug, Deserialize)]
struct PoolQuery {
    #[serde(default)]
    id: Option<String>,
}

async fn view_pool(
    State(state): State<AppState>,
    Query(query): Query<PoolQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let id = query.id.unwrap_or_default();
    if id.is_empty() {
        return Err(ApiError::missing_pool_id());
    }

    let credential = cookies::find_cookie(&headers, &cookies::credential_cookie_name(&id));
    let body = match state.gate.decide(&id, credential.as_deref()).await? {
        GateDecision::NotFound => return Err(ApiError::not_found()),
        GateDecision::SubmitRequired { pool } => state.renderer.submit_form(&pool),
        GateDecision::InsufficientData { pool } => state.renderer.insufficient(&pool),
        GateDecision::Reveal { pool, entries } => state.renderer.listing(&pool, &entries),
    };
    Ok(Html(body).into_response())
}

async fn submit_salary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SubmissionForm>,
) -> Result<Response, ApiError> {
    let cookie_name = cookies::credential_cookie_name(&form.id);
    let credential = cookies::find_cookie(&headers, &cookie_name);

    let pool = state.workflow.submit(credential.as_deref(), &form).await?;
    state.metrics.record_entry_recorded();

    let cookie = cookies::credential_set_cookie(
        &cookie_name,
        &pool.reveal_token.to_string(),
        state.cookie_ttl,
    );
    let mut response = Redirect::to(&format!("/pool?id={}", pool.public_token)).into_response();
    response.headers_mut().insert(
        SET_COOKIE,
        cookie.parse().map_err(|_| ApiError::server())?,
    );
    Ok(response)
}
