//! # Presentation Port
//!
//! Rendering of the four gate states into user-facing output.
//!
//! Production: `BasicHtmlRenderer` (adapters/html.rs)
//!
//! The gate and workflow never format output themselves; everything a user
//! sees goes through this boundary.

use shared_types::{Pool, SalaryEntry};

/// Renders gate states into HTML bodies.
pub trait ViewRenderer: Send + Sync {
    /// Landing page with the pool creation form.
    fn index_page(&self) -> String;

    /// Salary entry form for a viewer who has not yet submitted.
    fn submit_form(&self, pool: &Pool) -> String;

    /// Notice shown while a pool is below its minimum share size.
    fn insufficient(&self, pool: &Pool) -> String;

    /// Ranked salary listing for a credentialed viewer.
    fn listing(&self, pool: &Pool, entries: &[SalaryEntry]) -> String;
}
