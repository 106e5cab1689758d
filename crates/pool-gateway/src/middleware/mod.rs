//! Tower middleware for the gateway: request tracing and timeouts.

pub mod timeout;
pub mod tracing;

pub use timeout::TimeoutLayer;
pub use tracing::TracingLayer;
