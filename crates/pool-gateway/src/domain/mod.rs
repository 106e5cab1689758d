//! Domain logic: configuration, errors, the access gate, and the
//! submission workflow.

pub mod config;
pub mod error;
pub mod gate;
pub mod submission;

pub use config::GatewayConfig;
pub use error::{ApiError, GatewayError};
pub use gate::{AccessGate, GateDecision};
pub use submission::{SubmissionForm, SubmissionWorkflow};
