//! # Pool Store
//!
//! Persistence for pools and anonymous salary entries.
//!
//! The crate exposes two ports, `PoolStore` and `EntryStore`, and two
//! adapters: `PgStores` over a shared `sqlx` connection pool, and
//! `MemoryStores` for tests. Pool records are immutable once created and
//! entries are append-only; neither port offers an update or delete.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod ports;

pub use adapters::{MemoryStores, PgStores};
pub use ports::{EntryStore, PoolStore};
