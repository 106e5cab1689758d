//! The access gate: classifies a pool view request into one of four states.
//!
//! Evaluation order is load-bearing. The credential check runs before any
//! entry count is read, so a viewer who has not submitted learns nothing
//! about a pool beyond its existence and name. Reveal happens only for a
//! credentialed viewer of a pool at or above its minimum share size.
//!
//! The gate is stateless: every request is decided fresh from current store
//! contents plus the presented credential. Decisions are never cached. A
//! race between "count just reached the minimum" and "viewer checks the
//! count" can resolve either way; the threshold is advisory about aggregate
//! anonymity, so no locking is added around it.

use crate::domain::error::ApiError;
use pool_store::{EntryStore, PoolStore};
use shared_types::{AccessToken, Pool, SalaryEntry, StoreError};
use std::sync::Arc;

/// Outcome of gate evaluation.
#[derive(Debug)]
pub enum GateDecision {
    /// No pool has the requested public token.
    NotFound,
    /// The viewer holds no valid reveal credential for this pool.
    SubmitRequired { pool: Pool },
    /// Credentialed, but the pool is below its minimum share size.
    InsufficientData { pool: Pool },
    /// Credentialed and the pool has enough entries: full ranked listing.
    Reveal {
        pool: Pool,
        entries: Vec<SalaryEntry>,
    },
}

/// Decides pool visibility for incoming viewers.
pub struct AccessGate {
    pools: Arc<dyn PoolStore>,
    entries: Arc<dyn EntryStore>,
}

impl AccessGate {
    pub fn new(pools: Arc<dyn PoolStore>, entries: Arc<dyn EntryStore>) -> Self {
        Self { pools, entries }
    }

    /// Classify a view request.
    ///
    /// `presented_credential` is the raw client-held cookie value, if any;
    /// it grants reveal access only on an exact match with the pool's
    /// reveal token.
    pub async fn decide(
        &self,
        public_token: &str,
        presented_credential: Option<&str>,
    ) -> Result<GateDecision, ApiError> {
        // 1. Resolve the pool. A token that does not even parse cannot
        //    name a pool.
        let Ok(token) = AccessToken::parse(public_token) else {
            return Ok(GateDecision::NotFound);
        };
        let pool = match self.pools.pool_by_public_token(&token).await {
            Ok(pool) => pool,
            Err(StoreError::PoolNotFound) => return Ok(GateDecision::NotFound),
            Err(err) => return Err(err.into()),
        };

        // 2. Credential check, before any entry count is read.
        let credentialed = presented_credential
            .and_then(|raw| AccessToken::parse(raw).ok())
            .map(|credential| credential == pool.reveal_token)
            .unwrap_or(false);
        if !credentialed {
            return Ok(GateDecision::SubmitRequired { pool });
        }

        // 3. Threshold check.
        let count = self.entries.count_entries(pool.id).await.map_err(ApiError::from)?;
        if count < i64::from(pool.min_size) {
            return Ok(GateDecision::InsufficientData { pool });
        }

        // 4. Reveal.
        let entries = self.entries.list_entries(pool.id).await.map_err(ApiError::from)?;
        Ok(GateDecision::Reveal { pool, entries })
    }
}
