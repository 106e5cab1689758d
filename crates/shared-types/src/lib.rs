//! # Shared Types Crate
//!
//! This crate contains the domain entities, access tokens, and error
//! taxonomy shared by the store and gateway crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Anonymity by construction**: entry types carry no submitter identity
//!   and no timestamps.
//! - **Opaque credentials**: tokens compare by exact value only, in
//!   constant time.

pub mod entities;
pub mod errors;
pub mod token;

pub use entities::*;
pub use errors::*;
pub use token::{AccessToken, TokenParseError, TOKEN_BYTES, TOKEN_CHARS};
