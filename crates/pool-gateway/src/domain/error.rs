//! Gateway error types.
//!
//! `ApiError` is the only error shape that crosses the HTTP boundary: an
//! HTTP status plus a fixed generic message. Internal detail stays in
//! server-side logs. `GatewayError` covers service startup failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared_types::StoreError;
use thiserror::Error;
use tracing::{debug, error};

/// A user-visible request failure.
///
/// Messages are deliberately generic: a validation response never names the
/// field that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    /// Malformed or out-of-range input.
    pub fn validation() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "invalid input; check that all fields are filled in and non-negative",
        }
    }

    /// Pool view requested without a pool id.
    pub fn missing_pool_id() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "missing pool id",
        }
    }

    /// This client already holds a submission cookie for the pool.
    pub fn already_submitted() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "you have already submitted your salary",
        }
    }

    /// Referenced pool does not exist.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "requested pool does not exist",
        }
    }

    /// Persistence failure, surfaced without internal detail.
    pub fn server() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "something went wrong; please try again",
        }
    }

    /// Request exceeded its deadline.
    pub fn timeout() -> Self {
        Self {
            status: StatusCode::GATEWAY_TIMEOUT,
            message: "request timed out",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PoolNotFound => Self::not_found(),
            StoreError::Validation(detail) => {
                debug!(error = %detail, "input rejected");
                Self::validation()
            }
            StoreError::Database(_) | StoreError::Timeout => {
                error!(error = %err, "store failure");
                Self::server()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Gateway service startup errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Socket bind or serve failure.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
