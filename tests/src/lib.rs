//! # Salarypool Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── access_gate.rs   # Gate state machine scenarios
//!     ├── submission.rs    # Submission workflow scenarios
//!     └── http_flows.rs    # Full HTTP round trips through the router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p salarypool-tests
//! ```

#[cfg(test)]
mod integration;
