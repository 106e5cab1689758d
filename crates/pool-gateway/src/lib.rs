//! # Pool Gateway - HTTP interface for anonymous salary pools
//!
//! This crate provides the public surface of the salary pool service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      POOL GATEWAY                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │      Middleware: Tracing → Timeout → BodyLimit      │  │
//! │  └──────────────────────────┬─────────────────────────┘  │
//! │                             │                            │
//! │   GET /          POST /pool          POST /pool/salary   │
//! │   index          create pool         Submission Workflow │
//! │                                                          │
//! │   GET /pool ──────────→ Access Gate                      │
//! │                   SubmitRequired / InsufficientData      │
//! │                   Reveal / NotFound                      │
//! └──────────────┬──────────────────────────┬────────────────┘
//!                │                          │
//!           Pool Store                 Entry Store
//! ```
//!
//! # Access model
//!
//! A pool is addressed by its public token. Viewing its entries requires
//! the reveal token, which a client earns only by submitting its own entry,
//! and only once the pool holds at least its minimum number of entries.
//! Both checks run on every request; nothing is cached.
//!
//! # Security
//!
//! - Credentials are opaque 128-bit bearer tokens compared in constant time
//! - A viewer without the credential never sees the entry count
//! - Error responses carry generic messages only; detail stays in logs
//! - Request bodies are size-limited and every request carries a deadline

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod cookies;
pub mod domain;
pub mod metrics;
pub mod middleware;
pub mod ports;
pub mod router;
pub mod service;

// Re-exports for public API
pub use adapters::BasicHtmlRenderer;
pub use domain::config::GatewayConfig;
pub use domain::error::{ApiError, GatewayError};
pub use domain::gate::{AccessGate, GateDecision};
pub use domain::submission::{SubmissionForm, SubmissionWorkflow};
pub use metrics::GatewayMetrics;
pub use ports::render::ViewRenderer;
pub use router::{build_router, AppState};
pub use service::GatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
