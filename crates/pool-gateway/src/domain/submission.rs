//! The submission workflow: validate and record one entry, then issue the
//! reveal credential.
//!
//! Validation runs in a fixed order: numeric fields, the advisory
//! duplicate check, pool resolution, enumerated fields, then the insert.
//! The credential is issued only after the insert is acknowledged, so a
//! failed submission never leaves a client credentialed.
//!
//! The duplicate check compares only the client's own prior cookie for this
//! pool; there is no server-side record of who submitted. Clearing cookies
//! therefore allows resubmission. This is a documented tradeoff: tracking
//! submitters would break the anonymity contract.

use crate::domain::error::ApiError;
use pool_store::{EntryStore, PoolStore};
use serde::Deserialize;
use shared_types::{AccessToken, Frequency, Pool, RemoteLevel, SalaryFields, ValidationError};
use std::sync::Arc;
use tracing::{debug, info};

/// Raw submission form fields, exactly as posted. Missing fields
/// deserialize to empty strings and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    /// The pool's public token.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub hourswk: String,
    #[serde(default)]
    pub yearsexperience: String,
    #[serde(default)]
    pub overtime: String,
    /// Checkbox; present with the value `paid` when ticked.
    #[serde(default)]
    pub overtimepaid: Option<String>,
    #[serde(default)]
    pub remote: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub travel: String,
}

/// Records entries and hands back the pool whose reveal token becomes the
/// client's credential.
pub struct SubmissionWorkflow {
    pools: Arc<dyn PoolStore>,
    entries: Arc<dyn EntryStore>,
}

impl SubmissionWorkflow {
    pub fn new(pools: Arc<dyn PoolStore>, entries: Arc<dyn EntryStore>) -> Self {
        Self { pools, entries }
    }

    /// Validate and persist one submission.
    ///
    /// `presented_credential` is the client's prior cookie value for this
    /// pool, if any. On success the caller persists the returned pool's
    /// reveal token as the client credential.
    pub async fn submit(
        &self,
        presented_credential: Option<&str>,
        form: &SubmissionForm,
    ) -> Result<Pool, ApiError> {
        // 1. Numeric fields
        let amount = parse_non_negative_i32("amount", &form.amount)?;
        let hours_per_week = parse_non_negative_i16("hourswk", &form.hourswk)?;
        let years_experience = parse_non_negative_i16("yearsexperience", &form.yearsexperience)?;

        // 2. Advisory duplicate check: any prior cookie for this pool
        //    blocks, whatever its value.
        if presented_credential.is_some_and(|value| !value.is_empty()) {
            return Err(ApiError::already_submitted());
        }

        // 3. Pool resolution
        let token = AccessToken::parse(&form.id).map_err(|_| ApiError::not_found())?;
        let pool = self.pools.pool_by_public_token(&token).await?;

        // 4. Enumerated fields and bounds
        let fields = SalaryFields {
            amount,
            hours_per_week,
            overtime: Frequency::parse("overtime", &form.overtime).map_err(reject)?,
            overtime_paid: form.overtimepaid.as_deref() == Some("paid"),
            remote: RemoteLevel::parse("remote", &form.remote).map_err(reject)?,
            title: form.title.clone(),
            years_experience,
            travel: Frequency::parse("travel", &form.travel).map_err(reject)?,
        };
        fields.validate().map_err(reject)?;

        // 5. Insert. Credential issuance is the caller's next step, and
        //    only happens once this returns Ok.
        self.entries.insert_entry(pool.id, &fields).await?;
        info!(pool = pool.id.0, "salary entry recorded");
        Ok(pool)
    }
}

fn reject(err: ValidationError) -> ApiError {
    debug!(error = %err, "submission rejected");
    ApiError::validation()
}

fn parse_non_negative_i32(field: &'static str, raw: &str) -> Result<i32, ApiError> {
    let value: i32 = raw
        .parse()
        .map_err(|_| reject(ValidationError::NotANumber { field }))?;
    if value < 0 {
        return Err(reject(ValidationError::NegativeValue { field }));
    }
    Ok(value)
}

fn parse_non_negative_i16(field: &'static str, raw: &str) -> Result<i16, ApiError> {
    let value: i16 = raw
        .parse()
        .map_err(|_| reject(ValidationError::NotANumber { field }))?;
    if value < 0 {
        return Err(reject(ValidationError::NegativeValue { field }));
    }
    Ok(value)
}
