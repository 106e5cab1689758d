//! In-memory adapter for the store ports.
//!
//! Test double with the same contracts as the Postgres adapter. The listing
//! order is reproduced with an explicit comparator: title ascending
//! (byte-wise, matching Postgres `C` collation), then amount descending.

use crate::ports::{EntryStore, PoolStore};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{
    validate_pool_params, AccessToken, Pool, PoolId, SalaryEntry, SalaryFields, StoreError,
};

#[derive(Default)]
struct Inner {
    pools: Vec<Pool>,
    entries: Vec<SalaryEntry>,
    next_pool_id: i32,
}

/// Store ports backed by process memory.
///
/// The mutex guards synchronous map access only and is never held across a
/// suspension point.
#[derive(Default)]
pub struct MemoryStores {
    inner: Mutex<Inner>,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PoolStore for MemoryStores {
    async fn create_pool(&self, name: &str, min_size: i16) -> Result<Pool, StoreError> {
        validate_pool_params(name, min_size)?;
        let (public_token, reveal_token) = AccessToken::generate_distinct_pair();

        let mut inner = self.inner.lock();
        inner.next_pool_id += 1;
        let pool = Pool {
            id: PoolId(inner.next_pool_id),
            public_token,
            reveal_token,
            name: name.to_string(),
            min_size,
        };
        inner.pools.push(pool.clone());
        Ok(pool)
    }

    async fn pool_by_public_token(&self, token: &AccessToken) -> Result<Pool, StoreError> {
        self.inner
            .lock()
            .pools
            .iter()
            .find(|pool| pool.public_token == *token)
            .cloned()
            .ok_or(StoreError::PoolNotFound)
    }
}

#[async_trait]
impl EntryStore for MemoryStores {
    async fn count_entries(&self, pool: PoolId) -> Result<i64, StoreError> {
        let count = self
            .inner
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.pool_id == pool)
            .count();
        Ok(count as i64)
    }

    async fn insert_entry(&self, pool: PoolId, fields: &SalaryFields) -> Result<(), StoreError> {
        fields.validate()?;
        self.inner.lock().entries.push(SalaryEntry {
            pool_id: pool,
            fields: fields.clone(),
        });
        Ok(())
    }

    async fn list_entries(&self, pool: PoolId) -> Result<Vec<SalaryEntry>, StoreError> {
        let mut entries: Vec<SalaryEntry> = self
            .inner
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.pool_id == pool)
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            a.fields
                .title
                .cmp(&b.fields.title)
                .then(b.fields.amount.cmp(&a.fields.amount))
        });
        Ok(entries)
    }
}
