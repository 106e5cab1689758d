//! # Store Ports
//!
//! Abstract interfaces over pool and entry persistence.
//!
//! Production: `PgStores` (adapters/postgres.rs)
//! Testing: `MemoryStores` (adapters/memory.rs)
//!
//! Every operation is a suspension point; callers must not hold any
//! in-process lock across these calls.

use async_trait::async_trait;
use shared_types::{AccessToken, Pool, PoolId, SalaryEntry, SalaryFields, StoreError};

/// Persistence for pool records.
#[async_trait]
pub trait PoolStore: Send + Sync {
    /// Create a pool with two freshly generated, distinct tokens.
    ///
    /// Fails with `StoreError::Validation` when the name is empty or
    /// over-long, or when `min_size < 1`.
    async fn create_pool(&self, name: &str, min_size: i16) -> Result<Pool, StoreError>;

    /// Resolve a pool by its public token.
    ///
    /// Fails with `StoreError::PoolNotFound` when no pool has that token.
    async fn pool_by_public_token(&self, token: &AccessToken) -> Result<Pool, StoreError>;
}

/// Persistence for anonymous salary entries.
///
/// Entries are append-only: created here, never updated or deleted.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Number of entries recorded for a pool. Zero when the pool is empty
    /// or unknown.
    async fn count_entries(&self, pool: PoolId) -> Result<i64, StoreError>;

    /// Persist one entry for a pool.
    ///
    /// Re-validates field bounds at the storage boundary even though the
    /// submission workflow validates first.
    async fn insert_entry(&self, pool: PoolId, fields: &SalaryFields) -> Result<(), StoreError>;

    /// All entries for a pool, ordered by title ascending then amount
    /// descending. Both adapters must reproduce this ordering exactly.
    async fn list_entries(&self, pool: PoolId) -> Result<Vec<SalaryEntry>, StoreError>;
}
